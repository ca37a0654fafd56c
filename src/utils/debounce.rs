// ============================================================================
// DEBOUNCE - Trigger diferido de slot único + guardia de respuestas viejas
// ============================================================================
// Cada schedule() pisa al timer pendiente (last-call-wins): el callback se
// dispara a lo sumo una vez por ventana de silencio y siempre con los
// argumentos más recientes.
// ============================================================================

use gloo_timers::callback::Timeout;
use std::cell::{Cell, RefCell};
use std::rc::Rc;

/// Debouncer de slot único sobre `gloo_timers::Timeout`.
pub struct Debouncer<T: 'static> {
    delay_ms: u32,
    callback: Rc<dyn Fn(T)>,
    pending: Rc<RefCell<Option<Timeout>>>,
}

impl<T: 'static> Debouncer<T> {
    pub fn new<F>(delay_ms: u32, callback: F) -> Self
    where
        F: Fn(T) + 'static,
    {
        Self {
            delay_ms,
            callback: Rc::new(callback),
            pending: Rc::new(RefCell::new(None)),
        }
    }

    /// Programa el disparo con `value`. Un schedule posterior dentro de la
    /// ventana descarta este (se sobrescribe el slot, no se encola).
    pub fn schedule(&self, value: T) {
        let callback = self.callback.clone();
        let pending = self.pending.clone();
        let timeout = Timeout::new(self.delay_ms, move || {
            pending.borrow_mut().take();
            callback(value);
        });
        // Dropear el Timeout anterior lo cancela.
        *self.pending.borrow_mut() = Some(timeout);
    }

    pub fn cancel(&self) {
        self.pending.borrow_mut().take();
    }
}

impl<T: 'static> Clone for Debouncer<T> {
    fn clone(&self) -> Self {
        Self {
            delay_ms: self.delay_ms,
            callback: self.callback.clone(),
            pending: self.pending.clone(),
        }
    }
}

/// Secuencia monótona de requests. Una respuesta solo se aplica si su
/// número sigue siendo el vigente; así un fetch lento de la página 1 no
/// pisa el estado de un fetch más nuevo de la página 2.
#[derive(Clone, Default)]
pub struct RequestSeq {
    counter: Rc<Cell<u64>>,
}

impl RequestSeq {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registrar un request nuevo; invalida a todos los anteriores.
    pub fn begin(&self) -> u64 {
        let next = self.counter.get() + 1;
        self.counter.set(next);
        next
    }

    /// ¿La respuesta con este número sigue siendo la más reciente?
    pub fn is_current(&self, seq: u64) -> bool {
        self.counter.get() == seq
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn respuesta_vieja_queda_invalidada() {
        let seq = RequestSeq::new();
        let first = seq.begin();
        let second = seq.begin();
        // Llega tarde la respuesta del primer request: se descarta.
        assert!(!seq.is_current(first));
        assert!(seq.is_current(second));
    }

    #[test]
    fn clones_comparten_el_contador() {
        let seq = RequestSeq::new();
        let shared = seq.clone();
        let first = seq.begin();
        assert!(shared.is_current(first));
        shared.begin();
        assert!(!seq.is_current(first));
    }
}
