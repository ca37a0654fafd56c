// ============================================================================
// ROLE - Jerarquía de roles para el control de acceso
// ============================================================================
// El backend envía el rol como string plano; aquí lo cerramos en un enum
// con fallback explícito para roles desconocidos (rango 0, menor privilegio).
// ============================================================================

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// Rol del usuario autenticado. `Unknown` conserva el string original
/// para poder mostrarlo en la vista de acceso denegado.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Role {
    Viewer,
    Editor,
    Admin,
    SuperAdmin,
    Unknown(String),
}

impl Role {
    /// Rango numérico del rol. Un rol no reconocido vale 0.
    pub fn rank(&self) -> u8 {
        match self {
            Role::Viewer => 1,
            Role::Editor => 2,
            Role::Admin => 3,
            Role::SuperAdmin => 4,
            Role::Unknown(_) => 0,
        }
    }

    /// Nombre del rol tal como viaja por el wire.
    pub fn as_str(&self) -> &str {
        match self {
            Role::Viewer => "viewer",
            Role::Editor => "editor",
            Role::Admin => "admin",
            Role::SuperAdmin => "super_admin",
            Role::Unknown(raw) => raw.as_str(),
        }
    }

    /// Chequeo de permiso: super_admin pasa siempre (override explícito,
    /// no solo por tener el rango más alto); el resto compara rangos.
    pub fn satisfies(&self, required: &Role) -> bool {
        if matches!(self, Role::SuperAdmin) {
            return true;
        }
        self.rank() >= required.rank()
    }
}

impl From<&str> for Role {
    fn from(raw: &str) -> Self {
        match raw {
            "viewer" => Role::Viewer,
            "editor" => Role::Editor,
            "admin" => Role::Admin,
            "super_admin" => Role::SuperAdmin,
            other => Role::Unknown(other.to_string()),
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl Serialize for Role {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for Role {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        Ok(Role::from(raw.as_str()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rangos_de_la_tabla_fija() {
        assert_eq!(Role::Viewer.rank(), 1);
        assert_eq!(Role::Editor.rank(), 2);
        assert_eq!(Role::Admin.rank(), 3);
        assert_eq!(Role::SuperAdmin.rank(), 4);
        assert_eq!(Role::Unknown("ghost".into()).rank(), 0);
    }

    #[test]
    fn super_admin_pasa_cualquier_requisito() {
        for required in ["viewer", "editor", "admin", "super_admin", "nope"] {
            assert!(Role::SuperAdmin.satisfies(&Role::from(required)));
        }
    }

    #[test]
    fn comparacion_por_rango() {
        assert!(Role::Admin.satisfies(&Role::Editor));
        assert!(Role::Editor.satisfies(&Role::Editor));
        assert!(!Role::Editor.satisfies(&Role::Admin));
        assert!(!Role::Viewer.satisfies(&Role::Editor));
    }

    #[test]
    fn rol_desconocido_falla_cerrado() {
        let ghost = Role::from("ghost");
        assert!(!ghost.satisfies(&Role::Viewer));
        // Solo pasa contra otro rol de rango 0.
        assert!(ghost.satisfies(&Role::Unknown("otro".into())));
    }

    #[test]
    fn wire_round_trip() {
        let role: Role = serde_json::from_str("\"super_admin\"").unwrap();
        assert_eq!(role, Role::SuperAdmin);
        assert_eq!(serde_json::to_string(&role).unwrap(), "\"super_admin\"");

        let unknown: Role = serde_json::from_str("\"intern\"").unwrap();
        assert_eq!(unknown, Role::Unknown("intern".into()));
        assert_eq!(serde_json::to_string(&unknown).unwrap(), "\"intern\"");
    }
}
