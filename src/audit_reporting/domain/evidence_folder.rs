/// NewType wrapper for an evidence folder identifier
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct EvidenceFolderId(String);

impl EvidenceFolderId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for EvidenceFolderId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Evidence folder as listed for an assessment
///
/// Audit Manager names folders after the day of evidence they hold.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EvidenceFolder {
    id: EvidenceFolderId,
    name: String,
}

impl EvidenceFolder {
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: EvidenceFolderId::new(id),
            name: name.into(),
        }
    }

    pub fn id(&self) -> &EvidenceFolderId {
        &self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }
}

/// One page of an evidence folder listing
#[derive(Debug, Clone, Default, PartialEq)]
pub struct EvidenceFolderPage {
    pub folders: Vec<EvidenceFolder>,
    /// Token for the next page, `None` on the last page
    pub next_token: Option<String>,
}

impl EvidenceFolderPage {
    pub fn new(folders: Vec<EvidenceFolder>, next_token: Option<String>) -> Self {
        Self {
            folders,
            next_token,
        }
    }

    pub fn is_last(&self) -> bool {
        self.next_token.is_none()
    }
}
