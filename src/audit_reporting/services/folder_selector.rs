use crate::audit_reporting::domain::{EvidenceDate, EvidenceFolder, EvidenceFolderId};

/// FolderSelector - Picks the evidence folders holding one day of evidence
///
/// A folder is selected when its name equals the `YYYY-MM-DD` form of the
/// evidence date. No trimming or case folding is applied to folder names.
pub struct FolderSelector;

impl FolderSelector {
    /// Selects matching folder ids, preserving listing order
    ///
    /// # Arguments
    /// * `folders` - Folders collected from every listing page
    /// * `date` - Evidence date to match
    pub fn select<'a, I>(folders: I, date: &EvidenceDate) -> Vec<EvidenceFolderId>
    where
        I: IntoIterator<Item = &'a EvidenceFolder>,
    {
        let key = date.to_string();
        folders
            .into_iter()
            .filter(|folder| folder.name() == key)
            .map(|folder| folder.id().clone())
            .collect()
    }
}
