use common::model::config::ClientConfig;

pub enum Msg {
    /// Runtime configuration resolved; starts the initial load.
    ConfigLoaded(ClientConfig),
    /// Anything the synchronization core handles.
    Core(dashboard_sync::Msg),
    /// The upload button was pressed; the file count is read from the input.
    UploadClicked,
}

impl From<dashboard_sync::Msg> for Msg {
    fn from(msg: dashboard_sync::Msg) -> Self {
        Msg::Core(msg)
    }
}
