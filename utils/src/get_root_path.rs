//! Módulo para resolver rutas relativas a la raíz del workspace.

use std::{env, path::Path};

/// Carpeta, relativa a la raíz, con los esquemas y registros JSON de ejemplo.
pub const SCRIPTS_DIR: &str = "scripts";

/// Carpeta por defecto para los archivos de log.
pub const LOGS_DIR: &str = "logs";

/// Variable de entorno que, si está definida, reemplaza a [LOGS_DIR].
pub const LOGS_DIR_VAR: &str = "CQLC_LOG_DIR";

/// Obtiene la ruta absoluta desde la raíz del workspace.
pub fn get_root_path(relative_path: &str) -> String {
    let manifest_dir = Path::new(env!("CARGO_MANIFEST_DIR"));
    // Este paquete vive un nivel debajo de la raíz.
    let workspace_root = manifest_dir.parent().unwrap_or(manifest_dir);

    workspace_root
        .join(relative_path)
        .to_string_lossy()
        .to_string()
}

/// Obtiene la ruta absoluta de un archivo dentro de [SCRIPTS_DIR].
pub fn get_script_path(relative_path: &str) -> String {
    get_root_path(&format!("{}/{}", SCRIPTS_DIR, relative_path))
}

/// La carpeta donde se guardan los logs.
pub fn get_logs_dir() -> String {
    match env::var(LOGS_DIR_VAR) {
        Ok(dir) if !dir.trim().is_empty() => dir,
        _ => get_root_path(LOGS_DIR),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_1_la_raiz_contiene_el_workspace() {
        let manifest = get_root_path("Cargo.toml");

        assert!(Path::new(&manifest).exists());
        assert!(!manifest.contains("utils/Cargo.toml"));
    }

    #[test]
    fn test_2_rutas_de_scripts() {
        let path = get_script_path("schemas/users.json");

        assert!(path.ends_with("scripts/schemas/users.json"));
        assert!(Path::new(&path).exists());
    }
}
