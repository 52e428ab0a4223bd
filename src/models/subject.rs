use phf::phf_map;

/// 科目枚举（题库输出的固定集合）
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum SubjectKey {
    /// 生物
    Biology,
    /// 化学
    Chemistry,
    /// 物理
    Physics,
    /// 常识
    GeneralKnowledge,
    /// 法语
    French,
}

/// 标题别名表：规范化后的大写标题 -> 科目
///
/// 多个写法可以对应同一个科目
static SUBJECT_ALIASES: phf::Map<&'static str, SubjectKey> = phf_map! {
    "BIOLOGY" => SubjectKey::Biology,
    "CHEMISTRY" => SubjectKey::Chemistry,
    "PHYSICS" => SubjectKey::Physics,
    "GENERAL KNOWLEDGE" => SubjectKey::GeneralKnowledge,
    "GENERAL KNOWLEDGE SCIENTIFIC FIELD" => SubjectKey::GeneralKnowledge,
    // 常识与法语混排的试卷归入常识；不带 "A." 的写法不登记
    "GENERAL KNOWLEDGE AND FRENCHA." => SubjectKey::GeneralKnowledge,
    "GENERAL KNOWLEDGE & LANGUAGE" => SubjectKey::GeneralKnowledge,
    "FRENCH" => SubjectKey::French,
    "FRENCH LANGUAGE" => SubjectKey::French,
};

impl SubjectKey {
    /// 输出顺序
    pub const ALL: [SubjectKey; 5] = [
        SubjectKey::Biology,
        SubjectKey::Chemistry,
        SubjectKey::Physics,
        SubjectKey::GeneralKnowledge,
        SubjectKey::French,
    ];

    /// 获取科目键（也用于输出文件名）
    pub fn key(self) -> &'static str {
        match self {
            SubjectKey::Biology => "biology",
            SubjectKey::Chemistry => "chemistry",
            SubjectKey::Physics => "physics",
            SubjectKey::GeneralKnowledge => "general-knowledge",
            SubjectKey::French => "french",
        }
    }

    /// 输出文件名，例如 `biology-full.json`
    pub fn file_name(self) -> String {
        format!("{}-full.json", self.key())
    }

    /// 从科目标题解析科目（忽略大小写和多余空白）
    ///
    /// 未登记的标题返回 `None`
    pub fn from_header(header: &str) -> Option<Self> {
        let normalized = header
            .split_whitespace()
            .collect::<Vec<_>>()
            .join(" ")
            .to_uppercase();
        SUBJECT_ALIASES.get(normalized.as_str()).copied()
    }
}

impl std::fmt::Display for SubjectKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.key())
    }
}
