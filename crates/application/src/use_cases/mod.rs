pub mod lists;

pub use lists::{
    AppendListUseCase, BrowseListsUseCase, DeleteListUseCase, ReloadListsUseCase,
    RemoveDomainUseCase, ReplaceListUseCase, ValidateSourceUseCase,
};
