//! Funciones auxiliares compartidas entre los paquetes del workspace.
#![warn(missing_docs)]

pub mod get_root_path;
