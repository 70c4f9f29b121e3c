mod folder_selector;

pub use folder_selector::FolderSelector;
