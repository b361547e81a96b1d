use serde::Deserialize;
use std::path::{Path, PathBuf};

pub const DEFAULT_CONFIG: &str = "instaorm.toml";

/// Placeholder style used when printing templates.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Placeholders {
    /// `?`, as rendered by the builders.
    #[default]
    Positional,
    /// `$1, $2, ...`, as sent to PostgreSQL.
    Numbered,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ConfigFile {
    #[serde(default)]
    pub render: RenderConfig,
    pub database: Option<DatabaseConfig>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RenderConfig {
    #[serde(default)]
    pub placeholders: Placeholders,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct DatabaseConfig {
    pub url: String,
}

impl ConfigFile {
    /// Load `explicit`, or `instaorm.toml` when it exists, or the defaults.
    ///
    /// An explicitly named file must exist.
    pub fn load(explicit: Option<&Path>) -> anyhow::Result<Self> {
        let path = match explicit {
            Some(path) => path.to_path_buf(),
            None => {
                let path = PathBuf::from(DEFAULT_CONFIG);
                if !path.exists() {
                    tracing::debug!("no {DEFAULT_CONFIG}, using defaults");
                    return Ok(Self::default());
                }
                path
            }
        };

        let raw = std::fs::read_to_string(&path)
            .map_err(|e| anyhow::anyhow!("failed to read config file {}: {e}", path.display()))?;
        let mut file = Self::parse(&raw)
            .map_err(|e| anyhow::anyhow!("failed to parse config file {}: {e:#}", path.display()))?;
        file.expand_env()?;
        tracing::debug!(path = %path.display(), "loaded config");
        Ok(file)
    }

    fn parse(raw: &str) -> anyhow::Result<Self> {
        let file: Self = toml::from_str(raw)?;
        if let Some(db) = &file.database {
            if db.url.trim().is_empty() {
                anyhow::bail!("database.url must not be empty");
            }
        }
        Ok(file)
    }

    fn expand_env(&mut self) -> anyhow::Result<()> {
        if let Some(db) = self.database.as_mut() {
            db.url = expand_env_vars(&db.url, |key| std::env::var(key).ok())?;
        }
        Ok(())
    }
}

/// Replace every `${NAME}` in `input` with `lookup(NAME)`.
fn expand_env_vars(
    input: &str,
    lookup: impl Fn(&str) -> Option<String>,
) -> anyhow::Result<String> {
    let mut out = String::with_capacity(input.len());
    let mut rest = input;

    while let Some(start) = rest.find("${") {
        out.push_str(&rest[..start]);
        let after = &rest[start + 2..];
        let Some(end) = after.find('}') else {
            anyhow::bail!("unterminated env var reference in `{input}`");
        };
        let key = &after[..end];
        if key.is_empty() {
            anyhow::bail!("empty env var reference in `{input}`");
        }
        let value =
            lookup(key).ok_or_else(|| anyhow::anyhow!("missing env var for config expansion: {key}"))?;
        out.push_str(&value);
        rest = &after[end + 1..];
    }

    out.push_str(rest);
    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn env(key: &str) -> Option<String> {
        match key {
            "PGHOST" => Some("db.internal".to_string()),
            "PGUSER" => Some("insta".to_string()),
            _ => None,
        }
    }

    #[test]
    fn parse_full_config() {
        let file = ConfigFile::parse(
            r#"
            [render]
            placeholders = "numbered"

            [database]
            url = "postgres://localhost/insta"
            "#,
        )
        .unwrap();
        assert_eq!(file.render.placeholders, Placeholders::Numbered);
        assert_eq!(
            file.database.map(|db| db.url).as_deref(),
            Some("postgres://localhost/insta")
        );
    }

    #[test]
    fn empty_config_uses_defaults() {
        let file = ConfigFile::parse("").unwrap();
        assert_eq!(file.render.placeholders, Placeholders::Positional);
        assert!(file.database.is_none());
    }

    #[test]
    fn unknown_keys_are_rejected() {
        assert!(ConfigFile::parse("[render]\nstyle = \"x\"").is_err());
        assert!(ConfigFile::parse("[database]\nurl = \" \"").is_err());
    }

    #[test]
    fn expands_env_references() {
        let url = expand_env_vars("postgres://${PGUSER}@${PGHOST}/insta", env).unwrap();
        assert_eq!(url, "postgres://insta@db.internal/insta");
        assert_eq!(expand_env_vars("no refs", env).unwrap(), "no refs");
    }

    #[test]
    fn bad_env_references_fail() {
        assert!(expand_env_vars("${PGHOST", env).is_err());
        assert!(expand_env_vars("${}", env).is_err());
        let err = expand_env_vars("${NOPE}", env).unwrap_err();
        assert!(err.to_string().contains("NOPE"));
    }
}
