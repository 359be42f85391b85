//! 全局配置管理,存储所有可配置项

use crate::syntax::StyleFaces;

/// 全局配置
#[derive(Debug, Clone)]
pub struct EngineConfig {
    // 自定义方言（JSON文档字符串，None时使用内置默认方言）
    pub custom_dialect_json: Option<String>,
    // 默认样式字体参数
    pub faces: StyleFaces,
    // 是否启用详细日志
    pub verbose: bool,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            custom_dialect_json: None,
            faces: StyleFaces::default(),
            verbose: false,
        }
    }
}

/// 配置管理器（单例）
pub struct ConfigManager;

impl ConfigManager {
    /// 获取默认配置
    pub fn get_default() -> EngineConfig {
        EngineConfig::default()
    }

    /// 自定义配置
    pub fn custom() -> CustomConfigBuilder {
        CustomConfigBuilder::new()
    }
}

/// 配置构建器（便于自定义配置）
#[derive(Debug, Clone)]
pub struct CustomConfigBuilder {
    config: EngineConfig,
}

impl CustomConfigBuilder {
    pub fn new() -> Self {
        Self {
            config: EngineConfig::default(),
        }
    }

    pub fn custom_dialect_json(mut self, json: String) -> Self {
        self.config.custom_dialect_json = Some(json);
        self
    }

    pub fn faces(mut self, faces: StyleFaces) -> Self {
        self.config.faces = faces;
        self
    }

    pub fn verbose(mut self, verbose: bool) -> Self {
        self.config.verbose = verbose;
        self
    }

    pub fn build(self) -> EngineConfig {
        self.config
    }
}

impl Default for CustomConfigBuilder {
    fn default() -> Self {
        Self::new()
    }
}
