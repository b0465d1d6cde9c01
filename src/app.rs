use std::path::{Path, PathBuf};
use std::sync::Arc;

use crate::board::SkillBoard;
use crate::config::Config;
use crate::error::{Result, SbError};
use crate::resolver::SkillsResolver;
use crate::storage::OrderStore;

pub struct AppContext {
    pub sb_root: PathBuf,
    pub config_path: PathBuf,
    pub config: Config,
    pub store: Arc<OrderStore>,
    pub robot_mode: bool,
    pub verbosity: u8,
}

impl AppContext {
    pub fn from_cli(cli: &crate::cli::Cli) -> Result<Self> {
        let sb_root = Self::find_sb_root()?;
        let config_path = cli
            .config
            .clone()
            .or_else(|| std::env::var("SB_CONFIG").ok().map(PathBuf::from))
            .unwrap_or_else(|| default_config_path(&sb_root));
        let config = Config::load(cli.config.as_deref(), &sb_root)?;

        Ok(Self {
            store: Arc::new(OrderStore::new(&sb_root)),
            sb_root,
            config_path,
            config,
            robot_mode: cli.robot,
            verbosity: cli.verbose,
        })
    }

    /// The skill board bound to this context's store and config.
    pub fn board(&self) -> SkillBoard {
        SkillBoard::new(
            self.store.clone(),
            self.config.storage.key.clone(),
            self.config.board.fallback.clone(),
        )
    }

    /// The resolver configured for this context.
    pub fn resolver(&self) -> SkillsResolver {
        SkillsResolver::new(
            self.config.resolver.resource.clone(),
            self.config.board.fallback.clone(),
            self.config.board.placeholder.clone(),
        )
        .with_timeout(self.config.resolver.timeout())
    }

    fn find_sb_root() -> Result<PathBuf> {
        if let Ok(root) = std::env::var("SB_ROOT") {
            return Ok(PathBuf::from(root));
        }
        let cwd = std::env::current_dir()?;
        if let Some(found) = find_upwards(&cwd, ".sb")? {
            return Ok(found);
        }

        let data_dir = dirs::data_dir()
            .ok_or_else(|| SbError::MissingConfig("data directory not found".to_string()))?;
        Ok(data_dir.join("sb"))
    }
}

fn default_config_path(sb_root: &Path) -> PathBuf {
    if sb_root.ends_with(".sb") {
        sb_root.join("config.toml")
    } else {
        dirs::config_dir()
            .unwrap_or_else(|| sb_root.to_path_buf())
            .join("sb/config.toml")
    }
}

fn find_upwards(start: &Path, name: &str) -> Result<Option<PathBuf>> {
    let mut current = Some(start);
    while let Some(dir) = current {
        let candidate = dir.join(name);
        if candidate.is_dir() {
            return Ok(Some(candidate));
        }
        current = dir.parent();
    }
    Ok(None)
}
