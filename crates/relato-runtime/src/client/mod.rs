mod workspace;

pub use workspace::Relato;
