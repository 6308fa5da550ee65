use std::collections::HashSet;

/// 不分大小寫的子字串關鍵字比對器
#[derive(Debug, Clone, Default)]
pub struct KeywordMatcher {
    words: Vec<String>,
}

impl KeywordMatcher {
    /// 正規化關鍵字：去除空白、轉小寫、略過空字串並去重
    pub fn new<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut seen = HashSet::new();
        let words = words
            .into_iter()
            .map(|word| word.as_ref().trim().to_lowercase())
            .filter(|word| !word.is_empty())
            .filter(|word| seen.insert(word.clone()))
            .collect();

        Self { words }
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.words.len()
    }

    /// 回傳出現在 `text` 中的關鍵字，依關鍵字順序
    #[must_use]
    pub fn find_matches(&self, text: &str) -> Vec<String> {
        let haystack = text.to_lowercase();
        self.words
            .iter()
            .filter(|word| haystack.contains(word.as_str()))
            .cloned()
            .collect()
    }
}
