#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    #[error("Entity not found: {entity} named '{name}'")]
    NotFound { entity: &'static str, name: String },
}
