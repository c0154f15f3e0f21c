//! Literal page copy.
//!
//! Every list the page iterates over lives here as immutable `'static`
//! data. Components receive these slices and only render them.

/// Brand shown in the header and footer.
pub const BRAND_NAME: &str = "秒站 SEO";
/// Two-letter mark inside the logo square.
pub const BRAND_MARK: &str = "AI";

pub const COURSE_TITLE: &str = "AI SEO 速攻學";
pub const COURSE_TAGLINE: &str = "秒站站長們必學的網站成長啟動器";

/// Label of every "log in" affordance. They are presentational only.
pub const LOGIN_LABEL: &str = "登入會員";

/// Completion deadline highlighted under the syllabus.
pub const DEADLINE: &str = "2026 年 6 月 30 日前";

pub const COPYRIGHT: &str = "© 2024 AI SEO 速攻學 | 課程銷售頁 Wireframe Designer";

/// A same-page navigation entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavLink {
    pub label: &'static str,
    pub href: &'static str,
}

/// One of the core course modules shown as a numbered card.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CurriculumModule {
    pub title: &'static str,
    pub description: &'static str,
}

/// A chapter of the full syllabus.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SyllabusSection {
    pub title: &'static str,
    pub intro: &'static str,
    pub items: &'static [&'static str],
}

/// A closing call-to-action card.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CallToAction {
    pub heading: &'static str,
    pub tagline: &'static str,
    pub button: &'static str,
    /// Filled (primary) button vs outlined.
    pub primary: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FooterLink {
    pub label: &'static str,
    pub href: &'static str,
}

/// Ids of the sections reachable from the navigation.
pub const SECTION_IDS: &[&str] = &["intro", "instructor", "modules", "syllabus"];

const NAV_LINKS: &[NavLink] = &[
    NavLink { label: "關於課程", href: "#intro" },
    NavLink { label: "授課講師", href: "#instructor" },
    NavLink { label: "課程核心", href: "#modules" },
    NavLink { label: "完整課綱", href: "#syllabus" },
];

const OUTCOMES: &[&str] = &[
    "經營網站內容時，能夠用正確的架構撰文",
    "網站已設定成經營 SEO 所需設定，能夠被搜尋引擎正常索引",
    "理解 AI 搜尋環境下，內容與結構如何調整",
    "不自覺間，搞懂網站後台操作",
];

const MODULES: &[CurriculumModule] = &[
    CurriculumModule {
        title: "模組一｜秒站後台 × SEO 必要設定",
        description: "建立網站可被索引與理解的基本條件",
    },
    CurriculumModule {
        title: "模組二｜內容與搜尋意圖的基礎做法",
        description: "理解搜尋需求，避免方向性錯誤",
    },
    CurriculumModule {
        title: "模組三｜AI 搜尋時代的 SEO 起步邏輯",
        description: "因應 AI 搜尋環境的內容與結構觀念",
    },
];

const SYLLABUS: &[SyllabusSection] = &[
    SyllabusSection {
        title: "一｜秒站重要欄位與基礎設定",
        intro: "建立網站在搜尋系統中被正確理解的基礎設定",
        items: &[
            "網站標題與描述的基本設定",
            "首頁文案與服務介紹的搜尋寫作方式",
            "服務／產品頁的重要內容結構",
            "聯絡資訊頁的清楚呈現原則",
            "全站層級 SEO 欄位的設定方式",
        ],
    },
    SyllabusSection {
        title: "二｜全站必要行銷與搜尋設定",
        intro: "確保網站在技術層面完成基本的搜尋準備",
        items: &[
            "網站是否正式上線並可被索引",
            "Google Search Console（GSC）申請與設定",
            "Google Analytics（GA）基礎安裝",
            "Meta Pixel、Google Tag 的基本串接概念",
            "XML Sitemap 的提交與檢查方式",
        ],
    },
    SyllabusSection {
        title: "三｜文章與內容的 SEO 設定",
        intro: "讓內容結構與搜尋需求對齊，避免流量空轉",
        items: &[
            "Title、Description 的撰寫原則",
            "H 標籤的正確結構設定",
            "Focus Keyword 的設定與解讀方式",
            "自訂網址的設定觀念",
            "提升閱讀與完讀率的文章排版方式",
            "FAQ 的撰寫與 AI 協助設定方式",
            "標籤的使用原則與常見錯誤",
            "內部連結的配置方式",
            "圖檔 ALT 與搜尋輔助設定",
        ],
    },
    SyllabusSection {
        title: "四｜SEO 必備核心概念",
        intro: "建立正確的 SEO 基礎理解，避免錯誤期待",
        items: &[
            "關鍵字與搜尋量的基本概念",
            "SEO 內容是否達到及格標準的判斷方式",
            "搜尋意圖的分析與應用",
            "關鍵字地圖的基本介紹",
            "網站經營成效的時間與投入理解",
        ],
    },
    SyllabusSection {
        title: "五｜AI 搜尋時代的 SEO 入門觀念",
        intro: "理解 AI 搜尋環境下，內容與結構需調整的方向",
        items: &[
            "AI SEO 的核心操作觀念",
            "Query Fan-out 的主題擴展方式",
            "Grounding 與內容引用結構",
            "首發場對搜尋能見度的影響",
        ],
    },
];

const CALLS_TO_ACTION: &[CallToAction] = &[
    CallToAction {
        heading: "你已經是秒站站長？",
        tagline: "打好經營基礎，讓網站被搜尋到",
        button: "登入會員，免費上課",
        primary: true,
    },
    CallToAction {
        heading: "你尚未使用過秒站？",
        tagline: "只要幾秒，輕鬆擁有品牌網站",
        button: "註冊免費試用",
        primary: false,
    },
];

const FOOTER_LINKS: &[FooterLink] = &[
    FooterLink { label: "服務條款", href: "#" },
    FooterLink { label: "隱私權政策", href: "#" },
];

pub fn nav_links() -> &'static [NavLink] {
    NAV_LINKS
}

pub fn outcomes() -> &'static [&'static str] {
    OUTCOMES
}

pub fn curriculum_modules() -> &'static [CurriculumModule] {
    MODULES
}

pub fn syllabus() -> &'static [SyllabusSection] {
    SYLLABUS
}

pub fn calls_to_action() -> &'static [CallToAction] {
    CALLS_TO_ACTION
}

pub fn footer_links() -> &'static [FooterLink] {
    FOOTER_LINKS
}

/// Two-digit badge for a module card ("01", "02", ...).
pub fn module_badge(idx: usize) -> String {
    format!("{:02}", idx + 1)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use std::collections::HashSet;

    #[test]
    fn nav_links_target_known_sections() {
        let targets: Vec<&str> = nav_links()
            .iter()
            .map(|link| link.href.strip_prefix('#').unwrap_or(""))
            .collect();
        assert_eq!(targets, SECTION_IDS.to_vec());
    }

    #[test]
    fn nav_labels_are_unique() {
        let labels: HashSet<_> = nav_links().iter().map(|l| l.label).collect();
        assert_eq!(labels.len(), nav_links().len());
    }

    #[test]
    fn list_sizes_match_page_copy() {
        assert_eq!(nav_links().len(), 4);
        assert_eq!(outcomes().len(), 4);
        assert_eq!(curriculum_modules().len(), 3);
        assert_eq!(calls_to_action().len(), 2);

        let item_counts: Vec<usize> = syllabus().iter().map(|s| s.items.len()).collect();
        assert_eq!(item_counts, vec![5, 5, 9, 5, 4]);
    }

    #[test]
    fn module_badges_are_zero_padded() {
        assert_eq!(module_badge(0), "01");
        assert_eq!(module_badge(2), "03");
        assert_eq!(module_badge(9), "10");
    }
}
