//! Settings file infrastructure module

mod toml_file;

pub use toml_file::TomlSettingsFile;
