//! Bundled default content
//!
//! Used on first visit, after a reset, and whenever the stored data belongs to
//! another deployment or schema version.

use super::card::{Card, Priority};
use super::section::{Document, Section};

/// Headline number shown in the expanded sidebar
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Stat {
    pub value: &'static str,
    pub label: &'static str,
    pub icon: &'static str,
}

/// Static sidebar header content
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Profile {
    pub heading: &'static str,
    /// Heading used when the sidebar is collapsed on a wide viewport
    pub short_heading: &'static str,
    pub subtitle: &'static str,
    pub stats: Vec<Stat>,
}

pub fn default_profile() -> Profile {
    Profile {
        heading: "试用期汇报",
        short_heading: "试",
        subtitle: "高奕 - 云音乐研发工程师",
        stats: vec![
            Stat { value: "+8%/+2%", label: "意图", icon: "🎯" },
            Stat { value: "2+", label: "新场景", icon: "📈" },
            Stat { value: "1", label: "详情页解析", icon: "👥" },
            Stat { value: "1", label: "复现线上-Eval", icon: "📅" },
        ],
    }
}

/// The document shipped with the page
pub fn default_document() -> Document {
    Document::new(vec![
        Section::new(
            0,
            "Introduction",
            vec![
                Card::new(
                    1,
                    "你好，我叫高奕 👋",
                    "我是云音乐研发工程师，专注于使用人工智能改善产品功能的体验。\n\n我对Agent技术充满热情，特别是在RAG对话体验的优化方面。",
                    "👨‍💻",
                )
                .with_kind("个人介绍"),
                Card::new(
                    2,
                    "我的工程能力",
                    "• API Development\n• Frontend Development \n• Machine Learning\n• System Architecture",
                    "⚡",
                )
                .with_tags(&["FastAPI", "LLM", "Haystack", "React"]),
                Card::new(
                    3,
                    "专业领域",
                    "Prompt Engineering, LLM Evaluation, and Production AI Systems",
                    "🎯",
                )
                .with_skills(&["Prompt Design", "Evaluation", "RAG Systems"]),
            ],
        ),
        Section::new(
            1,
            "试用期项目亮点",
            vec![
                Card::new(
                    4,
                    "LLM评测-对话分轮",
                    "使用NLP算法为云音乐APP的LLM日志实现了一套对话分轮的算法，使其他评测与归因的算法得以基于真实轮次，提升统计的准确性。主要技术挑战为在无历史记录的状态下识别用户换轮对话。",
                    "🤖",
                )
                .with_metrics("意图准确率 +8% 实体准确率 +2%")
                .with_kind("Evaluation Framework"),
                Card::new(
                    5,
                    "Agent - Ragflow / Dify 智能体搭建",
                    "使用Ragflow为团队搭建了技术文档、内部wiki、Prompt管理的知识引擎。目前正在通过调研Dify，实现团队的workflow LLM应用，期望可以同时为算法与业务测试提供接口",
                    "🔄",
                )
                .with_timeline("30 days delivered")
                .with_kind("Infrastructure"),
                Card::new(
                    6,
                    "RAG - 网易云音乐小红书&豆瓣的详情页解析",
                    "首先实现了对小红书分享内容的爬取，豆瓣电影详情页解析等一系列，站外链接内容引入站内对话系统的详情页解析能力。对于分享场景而言，有效降低用户描述成本、精准获取歌曲",
                    "📊",
                )
                .with_priority(Priority::High)
                .with_kind("Automation Pipeline"),
            ],
        ),
        Section::new(
            2,
            "两月目标与学习",
            vec![
                Card::new(
                    7,
                    "Prompt优化策略",
                    "学习并实践了各种prompt engineering技术：包括2-shot examples, role-playing, constraint setting, output formatting等。深入理解了不同LLM对prompt的敏感度差异。",
                    "💡",
                )
                .with_tags(&["Prompt Engineering", "LLM Optimization"])
                .with_kind("Learning & Development"),
                Card::new(
                    8,
                    "场景拓展：生成",
                    "完成了全场景Prompt配置，并实现了可配置、可回归、可复用的架构。重点优化了生成场景的prompt，探索了few-shot learning在音乐推荐场景的应用。",
                    "🎨",
                )
                .with_metrics("覆盖15+场景")
                .with_kind("Feature Development"),
                Card::new(
                    9,
                    "Eval对话case还原",
                    "建立了完整的对话日志采集、清洗、标注、评测的pipeline。实现了基于真实用户对话的自动化测试框架，支持新版本上线前的回归测试。",
                    "🔍",
                )
                .with_skills(&["Data Pipeline", "Testing Framework", "Quality Assurance"])
                .with_kind("Quality Engineering"),
                Card::new(
                    10,
                    "行业调研与视野拓展",
                    "深入调研了OpenAI、Anthropic、Google的最新LLM进展，学习了RAG、Agent、Fine-tuning等技术方向。参与了多个AI技术分享会，保持技术视野的前沿性。",
                    "🌐",
                )
                .with_skills(&["Market Analysis", "User Research", "Data Analysis"])
                .with_kind("Strategic Thinking"),
            ],
        ),
        Section::new(
            3,
            "Future Plans",
            vec![
                Card::new(
                    11,
                    "Eval驱动的算法开发: 评估器",
                    "1. Eval定义与回归，保证新的版本不会导致旧的覆盖场景失败 \n2. 单模块/单场景可直接指标化评估 \n 3. Emphasize on ground factual recall on both prompts and chat history",
                    "🚀",
                )
                .with_timeline("Next 3 months")
                .with_priority(Priority::High)
                .with_kind("Project Leadership"),
                Card::new(
                    12,
                    "可迁移的Prompt架构: DSPy",
                    "1. 结构化Prompt,兼容线上与算法开发 2.提升Prompt模版在不同LLM之间的可迁移性 3. Auto-prompting: 以数据归因的提示词自动优化 4. structured Outputs",
                    "🧠",
                )
                .with_timeline("6 months")
                .with_priority(Priority::Medium)
                .with_kind("Technical Development"),
                Card::new(
                    13,
                    "场景持续迭代",
                    "Mentor new team members and build high-performing engineering culture.",
                    "🌟",
                )
                .with_timeline("Ongoing")
                .with_priority(Priority::High)
                .with_kind("People Development"),
                Card::new(
                    14,
                    "模拟对话-用户模拟",
                    "Contributing back to open source community with internal tools.",
                    "💡",
                )
                .with_timeline("Ongoing")
                .with_priority(Priority::Medium)
                .with_kind("Community"),
                Card::new(
                    15,
                    "Future",
                    "1. Red Teaming for testing/synthetic Data \n 2. CAI-ICAL for synthetic Data \n 3. Human-in-the-loop与prompt优化的闭环实现自动优化\n 4. chat history memory management 5. tool use, info retrieval, and data augmentation",
                    "🏗️",
                )
                .with_timeline("12 months")
                .with_priority(Priority::High)
                .with_kind("Career Growth"),
            ],
        ),
    ])
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_default_document_shape() {
        let doc = default_document();
        let ids: Vec<u32> = doc.sections.iter().map(|s| s.id).collect();
        assert_eq!(ids, vec![0, 1, 2, 3]);
        let counts: Vec<usize> = doc.sections.iter().map(|s| s.len()).collect();
        assert_eq!(counts, vec![3, 3, 4, 5]);
        assert_eq!(doc.max_card_id(), 15);
    }

    #[test]
    fn test_default_card_ids_unique() {
        let doc = default_document();
        let ids: HashSet<u64> = doc.sections.iter().flat_map(|s| s.cards.iter().map(|c| c.id)).collect();
        assert_eq!(ids.len(), doc.card_count());
    }

    #[test]
    fn test_profile_has_four_stats() {
        assert_eq!(default_profile().stats.len(), 4);
    }
}
