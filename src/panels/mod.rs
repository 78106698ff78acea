pub mod entry_ui;
pub mod panel_trait;
pub mod upload_ui;
pub mod values_ui;

pub use entry_ui::EntryPanel;
pub use panel_trait::Panel;
pub use upload_ui::UploadPanel;
pub use values_ui::ValuesPanel;
