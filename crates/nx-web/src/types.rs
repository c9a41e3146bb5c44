/// Data backing the overview page (shared between server fn and view).
#[derive(Clone, Debug, serde::Serialize, serde::Deserialize)]
pub struct OverviewData {
    pub version: String,
    pub directory_url: String,
}
