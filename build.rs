use std::env;
use std::fs;
use std::path::Path;

// Inyecta las variables de .env como env de compilación para que
// option_env! las vea (BACKEND_URL_*, ENVIRONMENT, etc.).
fn main() {
    let env_file = Path::new(".env");

    if env_file.exists() {
        println!("cargo:rerun-if-changed=.env");

        if let Ok(contents) = fs::read_to_string(env_file) {
            for line in contents.lines() {
                let line = line.trim();
                if line.is_empty() || line.starts_with('#') {
                    continue;
                }

                if let Some((key, value)) = line.split_once('=') {
                    let key = key.trim();
                    let value = value.trim();

                    // Las variables ya presentes en el entorno ganan.
                    if env::var(key).is_err() {
                        println!("cargo:rustc-env={}={}", key, value);
                    }
                }
            }
        }
    } else {
        println!("cargo:warning=Sin archivo .env, se usan los valores por defecto de config.rs");
    }

    println!("cargo:rerun-if-changed=build.rs");
}
