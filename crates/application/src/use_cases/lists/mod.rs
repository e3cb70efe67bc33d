pub mod append;
pub mod browse;
pub mod delete;
pub mod reload;
pub mod remove;
pub mod replace;
pub mod validate;

pub use append::AppendListUseCase;
pub use browse::BrowseListsUseCase;
pub use delete::DeleteListUseCase;
pub use reload::ReloadListsUseCase;
pub use remove::RemoveDomainUseCase;
pub use replace::ReplaceListUseCase;
pub use validate::ValidateSourceUseCase;
