// Environment overrides, e.g. INSPECT_PROFILE=touch INSPECT_RETICLE=80.

use inspect_core::{PlatformCapabilities, ViewerConfig};

pub const ENV_PREFIX: &str = "INSPECT_";

/// Keep `INSPECT_*` variables, turning `INSPECT_RETICLE` into `reticle`.
pub fn env_overrides<I>(vars: I) -> Vec<(String, String)>
where
    I: IntoIterator<Item = (String, String)>,
{
    vars.into_iter()
        .filter_map(|(k, v)| {
            let key = k.strip_prefix(ENV_PREFIX)?;
            (!key.is_empty()).then(|| (key.to_ascii_lowercase(), v))
        })
        .collect()
}

pub fn load_config<I>(vars: I) -> ViewerConfig
where
    I: IntoIterator<Item = (String, String)>,
{
    let mut config = ViewerConfig::for_platform(PlatformCapabilities {
        web: false,
        touch: false,
    });
    let pairs = env_overrides(vars);
    config.apply_overrides(pairs.iter().map(|(k, v)| (k.as_str(), v.as_str())));
    config
}
