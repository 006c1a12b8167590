/// Every path the dispatcher knows about
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Route {
    // static status payload
    Projects,
    // presigned PUT for a fresh key
    GetUploadUrl,
    // listing with presigned GETs
    Images,
    NotFound,
}

impl Route {
    #[must_use]
    pub fn from_path(path: &str) -> Self {
        match path {
            "/projects" => Self::Projects,
            "/getUploadUrl" => Self::GetUploadUrl,
            "/images" => Self::Images,
            _ => Self::NotFound,
        }
    }
}
