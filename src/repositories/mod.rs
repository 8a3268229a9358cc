//! Repositorios de persistencia
//!
//! Acceso al almacenamiento durable de la garagem.

pub mod garage_repository;
