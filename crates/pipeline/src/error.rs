use thiserror::Error;

/// Errors surfaced by the export and filter stages
#[derive(Error, Debug)]
pub enum PipelineError {
    #[error(transparent)]
    Db(#[from] sccmkit_db::DbError),

    #[error(transparent)]
    Sheet(#[from] sccmkit_sheet::SheetError),
}

pub type Result<T> = std::result::Result<T, PipelineError>;
