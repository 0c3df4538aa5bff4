//! Translation tables for the console UI.
//!
//! Keys are namespaced the same way on every page (`knowledgeDetails.dataset`,
//! `knowledgeList.title`, ...). A key missing from the table translates to itself.

use std::str::FromStr;

/// UI languages
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Language {
    #[default]
    English,
    Chinese,
}

impl Language {
    pub fn as_str(&self) -> &'static str {
        match self {
            Language::English => "en",
            Language::Chinese => "zh",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            Language::English => "English",
            Language::Chinese => "简体中文",
        }
    }

    pub fn toggle(&self) -> Language {
        match self {
            Language::English => Language::Chinese,
            Language::Chinese => Language::English,
        }
    }
}

impl FromStr for Language {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "zh" | "zh-CN" | "zh-Hans" => Ok(Language::Chinese),
            _ => Ok(Language::English), // Default to English
        }
    }
}

/// Translation function bound to one language
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Translator {
    language: Language,
}

impl Translator {
    pub fn new(language: Language) -> Self {
        Self { language }
    }

    pub fn language(&self) -> Language {
        self.language
    }

    /// Translate a namespaced key, falling back to the key itself
    pub fn t(&self, key: &str) -> String {
        lookup(self.language, key)
            .or_else(|| lookup(Language::English, key))
            .map(str::to_string)
            .unwrap_or_else(|| key.to_string())
    }
}

fn lookup(language: Language, key: &str) -> Option<&'static str> {
    let text = match (language, key) {
        (Language::English, "knowledgeDetails.dataset") => "Dataset",
        (Language::English, "knowledgeDetails.configuration") => "Configuration",
        (Language::English, "knowledgeDetails.testing") => "Retrieval testing",
        (Language::English, "knowledgeDetails.datasetDescription") => {
            "Files uploaded to this knowledge base and their parsing status."
        }
        (Language::English, "knowledgeDetails.configurationDescription") => {
            "Chunking method, embedding model and access settings."
        }
        (Language::English, "knowledgeDetails.testingDescription") => {
            "Run a query against this knowledge base and inspect the retrieved chunks."
        }
        (Language::English, "knowledgeList.title") => "Knowledge bases",
        (Language::English, "knowledgeList.empty") => "No knowledge base yet.",
        (Language::English, "knowledgeList.documents") => "documents",
        (Language::English, "common.loading") => "Loading...",
        (Language::English, "common.notFound") => "Page not found",
        (Language::English, "common.home") => "Knowledge Console",

        (Language::Chinese, "knowledgeDetails.dataset") => "数据集",
        (Language::Chinese, "knowledgeDetails.configuration") => "配置",
        (Language::Chinese, "knowledgeDetails.testing") => "检索测试",
        (Language::Chinese, "knowledgeDetails.datasetDescription") => "上传到该知识库的文件及其解析状态。",
        (Language::Chinese, "knowledgeDetails.configurationDescription") => "切片方法、嵌入模型与访问权限设置。",
        (Language::Chinese, "knowledgeDetails.testingDescription") => "对该知识库发起查询并查看召回的切片。",
        (Language::Chinese, "knowledgeList.title") => "知识库",
        (Language::Chinese, "knowledgeList.empty") => "暂无知识库。",
        (Language::Chinese, "knowledgeList.documents") => "个文件",
        (Language::Chinese, "common.loading") => "加载中...",
        (Language::Chinese, "common.notFound") => "页面不存在",
        (Language::Chinese, "common.home") => "知识库控制台",

        _ => return None,
    };
    Some(text)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_translates_sidebar_keys() {
        let en = Translator::new(Language::English);
        assert_eq!(en.t("knowledgeDetails.dataset"), "Dataset");
        assert_eq!(en.t("knowledgeDetails.configuration"), "Configuration");
        assert_eq!(en.t("knowledgeDetails.testing"), "Retrieval testing");

        let zh = Translator::new(Language::Chinese);
        assert_eq!(zh.t("knowledgeDetails.dataset"), "数据集");
        assert_eq!(zh.t("knowledgeDetails.testing"), "检索测试");
    }

    #[test]
    fn test_unknown_key_translates_to_itself() {
        let zh = Translator::new(Language::Chinese);
        assert_eq!(zh.t("knowledgeDetails.unknown"), "knowledgeDetails.unknown");
    }

    #[test]
    fn test_language_parsing_defaults_to_english() {
        assert_eq!("zh".parse::<Language>(), Ok(Language::Chinese));
        assert_eq!("zh-CN".parse::<Language>(), Ok(Language::Chinese));
        assert_eq!("fr".parse::<Language>(), Ok(Language::English));
        assert_eq!(Language::English.toggle(), Language::Chinese);
        assert_eq!(Language::Chinese.as_str(), "zh");
    }
}
