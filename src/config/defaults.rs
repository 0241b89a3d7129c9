//! Default configuration constants.

/// Directory under the user config root holding the global config file.
pub(super) const CONFIG_DIR_NAME: &str = "themeport";
/// Config file name, both in the working directory and the global directory.
pub(super) const CONFIG_FILE_NAME: &str = "themeport.toml";
/// Colored `--preview` output unless disabled.
pub(super) const DEFAULT_DISPLAY_COLOR: bool = true;
