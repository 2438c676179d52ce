use crate::config::CONFIG_FILE_NAME;
use crate::io;
use anyhow::Result;
use std::path::PathBuf;

pub fn init_config(force: bool) -> Result<()> {
    let config_path = PathBuf::from(CONFIG_FILE_NAME);

    if config_path.exists() && !force {
        anyhow::bail!("Configuration file already exists. Use --force to overwrite.");
    }

    let default_config = r#"# Stackshift configuration

[detection]
# Files sampled per content probe; bounds scan cost on large trees
content_sample_limit = 10
# Minimum confidence for a framework to count as detected
detection_threshold = 30.0
# Minimum confidence for the primary framework
primary_threshold = 70.0
# Minimum confidence for secondary frameworks
secondary_threshold = 50.0

[ignore]
patterns = [
    "*.min.js",
    "dist/**",
    "build/**"
]

[output]
default_format = "terminal"
"#;

    io::write_file(&config_path, default_config)?;
    println!("Created {CONFIG_FILE_NAME} configuration file");

    Ok(())
}
