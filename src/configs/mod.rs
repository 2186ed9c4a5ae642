mod site;

pub use site::{ EnvConfig, ImageConfig, SiteConfig, CUSTOM_KEY_ENV, SITE_CONFIG_ENV };
