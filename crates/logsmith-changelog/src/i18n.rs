//! Localized labels, commit type titles and dates

use std::sync::LazyLock;

use chrono::{DateTime, Locale, NaiveDate};
use logsmith_core::{Language, Theme};
use regex::Regex;

use crate::themes::theme_emoji;

/// Leading symbols (emoji, punctuation) and the whitespace after them.
///
/// Only ASCII letters, digits and `_` count as word characters so that
/// variation selectors are stripped together with their emoji.
static LEADING_SYMBOLS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[^A-Za-z0-9_\s]+\s*").expect("Invalid regex"));

/// Runs of ASCII letters inside a date pattern
static DATE_TOKEN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[A-Za-z]+").expect("Invalid regex"));

/// Messages for one language
#[derive(Debug, Clone, Copy)]
pub struct Messages {
    /// Commit type display names, emoji included, in canonical order
    pub commit_types: &'static [(&'static str, &'static str)],
    pub labels: Labels,
    pub date_formats: DateFormats,
}

impl Messages {
    /// Display name of a commit type, if the language knows it
    pub fn commit_type(&self, commit_type: &str) -> Option<&'static str> {
        self.commit_types
            .iter()
            .find(|(key, _)| *key == commit_type)
            .map(|(_, text)| *text)
    }
}

/// User-facing labels
#[derive(Debug, Clone, Copy)]
pub struct Labels {
    pub changelog: &'static str,
    pub contributors: &'static str,
    pub breaking_changes: &'static str,
    pub compare_changes: &'static str,
    pub commits: &'static str,
    pub sections: &'static str,
    pub most_active: &'static str,
    pub new_contributors: &'static str,
    pub top_contributors: &'static str,
    pub repository_stats: &'static str,
    pub commit_frequency: &'static str,
    pub total_days: &'static str,
    pub average_per_day: &'static str,
    pub peak_day: &'static str,
    pub recent_activity: &'static str,
    pub range: &'static str,
    pub total_commits: &'static str,
    pub breaking_changes_count: &'static str,
    pub most_common: &'static str,
    pub least_common: &'static str,
    pub distribution: &'static str,
    pub by: &'static str,
}

/// Date patterns (`yyyy`, `MMMM`, `MM`, `M`, `dd`, `d`)
#[derive(Debug, Clone, Copy)]
pub struct DateFormats {
    pub full: &'static str,
    pub short: &'static str,
}

/// Which date pattern to render
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DateStyle {
    #[default]
    Full,
    Short,
}

// English
static EN: Messages = Messages {
    commit_types: &[
        ("feat", "🚀 Features"),
        ("fix", "🐛 Bug Fixes"),
        ("docs", "📚 Documentation"),
        ("style", "💅 Styles"),
        ("refactor", "♻️ Code Refactoring"),
        ("perf", "⚡ Performance Improvements"),
        ("test", "🧪 Tests"),
        ("build", "📦 Build System"),
        ("ci", "🤖 Continuous Integration"),
        ("chore", "🧹 Chores"),
        ("revert", "⏪ Reverts"),
        ("misc", "📄 Miscellaneous"),
    ],
    labels: Labels {
        changelog: "Changelog",
        contributors: "Contributors",
        breaking_changes: "Breaking Changes",
        compare_changes: "Compare changes",
        commits: "commits",
        sections: "sections",
        most_active: "Most active",
        new_contributors: "New contributors",
        top_contributors: "Top contributors",
        repository_stats: "Repository Statistics",
        commit_frequency: "Commit Frequency",
        total_days: "Total days with commits",
        average_per_day: "Average commits per day",
        peak_day: "Peak day",
        recent_activity: "Recent activity",
        range: "Range",
        total_commits: "Total commits",
        breaking_changes_count: "Breaking changes",
        most_common: "Most common",
        least_common: "Least common",
        distribution: "Distribution",
        by: "by",
    },
    date_formats: DateFormats {
        full: "MMMM d, yyyy",
        short: "yyyy-MM-dd",
    },
};

// Spanish
static ES: Messages = Messages {
    commit_types: &[
        ("feat", "🚀 Características"),
        ("fix", "🐛 Correcciones"),
        ("docs", "📚 Documentación"),
        ("style", "💅 Estilos"),
        ("refactor", "♻️ Refactorización"),
        ("perf", "⚡ Mejoras de Rendimiento"),
        ("test", "🧪 Pruebas"),
        ("build", "📦 Sistema de Construcción"),
        ("ci", "🤖 Integración Continua"),
        ("chore", "🧹 Tareas"),
        ("revert", "⏪ Reversiones"),
        ("misc", "📄 Misceláneos"),
    ],
    labels: Labels {
        changelog: "Registro de Cambios",
        contributors: "Colaboradores",
        breaking_changes: "Cambios Importantes",
        compare_changes: "Comparar cambios",
        commits: "commits",
        sections: "secciones",
        most_active: "Más activo",
        new_contributors: "Nuevos colaboradores",
        top_contributors: "Principales colaboradores",
        repository_stats: "Estadísticas del Repositorio",
        commit_frequency: "Frecuencia de Commits",
        total_days: "Días totales con commits",
        average_per_day: "Promedio de commits por día",
        peak_day: "Día pico",
        recent_activity: "Actividad reciente",
        range: "Rango",
        total_commits: "Total de commits",
        breaking_changes_count: "Cambios importantes",
        most_common: "Más común",
        least_common: "Menos común",
        distribution: "Distribución",
        by: "por",
    },
    date_formats: DateFormats {
        full: "d de MMMM de yyyy",
        short: "dd/MM/yyyy",
    },
};

// French
static FR: Messages = Messages {
    commit_types: &[
        ("feat", "🚀 Fonctionnalités"),
        ("fix", "🐛 Corrections"),
        ("docs", "📚 Documentation"),
        ("style", "💅 Styles"),
        ("refactor", "♻️ Refactorisation"),
        ("perf", "⚡ Améliorations de Performance"),
        ("test", "🧪 Tests"),
        ("build", "📦 Système de Build"),
        ("ci", "🤖 Intégration Continue"),
        ("chore", "🧹 Tâches"),
        ("revert", "⏪ Annulations"),
        ("misc", "📄 Divers"),
    ],
    labels: Labels {
        changelog: "Journal des Modifications",
        contributors: "Contributeurs",
        breaking_changes: "Changements Majeurs",
        compare_changes: "Comparer les changements",
        commits: "commits",
        sections: "sections",
        most_active: "Le plus actif",
        new_contributors: "Nouveaux contributeurs",
        top_contributors: "Principaux contributeurs",
        repository_stats: "Statistiques du Dépôt",
        commit_frequency: "Fréquence des Commits",
        total_days: "Jours totaux avec commits",
        average_per_day: "Moyenne de commits par jour",
        peak_day: "Jour de pointe",
        recent_activity: "Activité récente",
        range: "Plage",
        total_commits: "Total des commits",
        breaking_changes_count: "Changements majeurs",
        most_common: "Le plus courant",
        least_common: "Le moins courant",
        distribution: "Distribution",
        by: "par",
    },
    date_formats: DateFormats {
        full: "d MMMM yyyy",
        short: "dd/MM/yyyy",
    },
};

// German
static DE: Messages = Messages {
    commit_types: &[
        ("feat", "🚀 Features"),
        ("fix", "🐛 Fehlerbehebungen"),
        ("docs", "📚 Dokumentation"),
        ("style", "💅 Stile"),
        ("refactor", "♻️ Code-Refactoring"),
        ("perf", "⚡ Performance-Verbesserungen"),
        ("test", "🧪 Tests"),
        ("build", "📦 Build-System"),
        ("ci", "🤖 Kontinuierliche Integration"),
        ("chore", "🧹 Wartungsarbeiten"),
        ("revert", "⏪ Rückgängigmachungen"),
        ("misc", "📄 Verschiedenes"),
    ],
    labels: Labels {
        changelog: "Änderungsprotokoll",
        contributors: "Mitwirkende",
        breaking_changes: "Breaking Changes",
        compare_changes: "Änderungen vergleichen",
        commits: "Commits",
        sections: "Abschnitte",
        most_active: "Aktivster",
        new_contributors: "Neue Mitwirkende",
        top_contributors: "Top-Mitwirkende",
        repository_stats: "Repository-Statistiken",
        commit_frequency: "Commit-Häufigkeit",
        total_days: "Gesamttage mit Commits",
        average_per_day: "Durchschnittliche Commits pro Tag",
        peak_day: "Spitzentag",
        recent_activity: "Aktuelle Aktivität",
        range: "Bereich",
        total_commits: "Gesamt-Commits",
        breaking_changes_count: "Breaking Changes",
        most_common: "Am häufigsten",
        least_common: "Am seltensten",
        distribution: "Verteilung",
        by: "von",
    },
    date_formats: DateFormats {
        full: "d. MMMM yyyy",
        short: "dd.MM.yyyy",
    },
};

// Chinese (Simplified)
static ZH: Messages = Messages {
    commit_types: &[
        ("feat", "🚀 新功能"),
        ("fix", "🐛 错误修复"),
        ("docs", "📚 文档"),
        ("style", "💅 样式"),
        ("refactor", "♻️ 代码重构"),
        ("perf", "⚡ 性能优化"),
        ("test", "🧪 测试"),
        ("build", "📦 构建系统"),
        ("ci", "🤖 持续集成"),
        ("chore", "🧹 杂项"),
        ("revert", "⏪ 回滚"),
        ("misc", "📄 其他"),
    ],
    labels: Labels {
        changelog: "更新日志",
        contributors: "贡献者",
        breaking_changes: "破坏性变更",
        compare_changes: "比较变更",
        commits: "提交",
        sections: "部分",
        most_active: "最活跃",
        new_contributors: "新贡献者",
        top_contributors: "主要贡献者",
        repository_stats: "仓库统计",
        commit_frequency: "提交频率",
        total_days: "总提交天数",
        average_per_day: "平均每日提交",
        peak_day: "峰值日",
        recent_activity: "最近活动",
        range: "范围",
        total_commits: "总提交数",
        breaking_changes_count: "破坏性变更",
        most_common: "最常见",
        least_common: "最少见",
        distribution: "分布",
        by: "由",
    },
    date_formats: DateFormats {
        full: "yyyy年M月d日",
        short: "yyyy-MM-dd",
    },
};

// Japanese
static JA: Messages = Messages {
    commit_types: &[
        ("feat", "🚀 新機能"),
        ("fix", "🐛 バグ修正"),
        ("docs", "📚 ドキュメント"),
        ("style", "💅 スタイル"),
        ("refactor", "♻️ リファクタリング"),
        ("perf", "⚡ パフォーマンス改善"),
        ("test", "🧪 テスト"),
        ("build", "📦 ビルドシステム"),
        ("ci", "🤖 継続的インテグレーション"),
        ("chore", "🧹 雑務"),
        ("revert", "⏪ 巻き戻し"),
        ("misc", "📄 その他"),
    ],
    labels: Labels {
        changelog: "変更履歴",
        contributors: "貢献者",
        breaking_changes: "破壊的変更",
        compare_changes: "変更を比較",
        commits: "コミット",
        sections: "セクション",
        most_active: "最もアクティブ",
        new_contributors: "新しい貢献者",
        top_contributors: "主要貢献者",
        repository_stats: "リポジトリ統計",
        commit_frequency: "コミット頻度",
        total_days: "コミットした総日数",
        average_per_day: "1日平均コミット数",
        peak_day: "ピーク日",
        recent_activity: "最近の活動",
        range: "範囲",
        total_commits: "総コミット数",
        breaking_changes_count: "破壊的変更",
        most_common: "最も一般的",
        least_common: "最も少ない",
        distribution: "分布",
        by: "による",
    },
    date_formats: DateFormats {
        full: "yyyy年M月d日",
        short: "yyyy/MM/dd",
    },
};

// Korean
static KO: Messages = Messages {
    commit_types: &[
        ("feat", "🚀 새로운 기능"),
        ("fix", "🐛 버그 수정"),
        ("docs", "📚 문서"),
        ("style", "💅 스타일"),
        ("refactor", "♻️ 코드 리팩토링"),
        ("perf", "⚡ 성능 개선"),
        ("test", "🧪 테스트"),
        ("build", "📦 빌드 시스템"),
        ("ci", "🤖 지속적 통합"),
        ("chore", "🧹 기타 작업"),
        ("revert", "⏪ 되돌리기"),
        ("misc", "📄 기타"),
    ],
    labels: Labels {
        changelog: "변경 로그",
        contributors: "기여자",
        breaking_changes: "주요 변경사항",
        compare_changes: "변경사항 비교",
        commits: "커밋",
        sections: "섹션",
        most_active: "가장 활발한",
        new_contributors: "새로운 기여자",
        top_contributors: "주요 기여자",
        repository_stats: "저장소 통계",
        commit_frequency: "커밋 빈도",
        total_days: "커밋한 총 일수",
        average_per_day: "일평균 커밋 수",
        peak_day: "최고 활동일",
        recent_activity: "최근 활동",
        range: "범위",
        total_commits: "총 커밋 수",
        breaking_changes_count: "주요 변경사항",
        most_common: "가장 일반적",
        least_common: "가장 적은",
        distribution: "분포",
        by: "작성자",
    },
    date_formats: DateFormats {
        full: "yyyy년 M월 d일",
        short: "yyyy-MM-dd",
    },
};

// Russian
static RU: Messages = Messages {
    commit_types: &[
        ("feat", "🚀 Новые возможности"),
        ("fix", "🐛 Исправления ошибок"),
        ("docs", "📚 Документация"),
        ("style", "💅 Стили"),
        ("refactor", "♻️ Рефакторинг кода"),
        ("perf", "⚡ Улучшения производительности"),
        ("test", "🧪 Тесты"),
        ("build", "📦 Система сборки"),
        ("ci", "🤖 Непрерывная интеграция"),
        ("chore", "🧹 Прочие задачи"),
        ("revert", "⏪ Откаты"),
        ("misc", "📄 Разное"),
    ],
    labels: Labels {
        changelog: "История изменений",
        contributors: "Участники",
        breaking_changes: "Критические изменения",
        compare_changes: "Сравнить изменения",
        commits: "коммитов",
        sections: "разделов",
        most_active: "Самый активный",
        new_contributors: "Новые участники",
        top_contributors: "Основные участники",
        repository_stats: "Статистика репозитория",
        commit_frequency: "Частота коммитов",
        total_days: "Всего дней с коммитами",
        average_per_day: "Среднее коммитов в день",
        peak_day: "Пиковый день",
        recent_activity: "Недавняя активность",
        range: "Диапазон",
        total_commits: "Всего коммитов",
        breaking_changes_count: "Критические изменения",
        most_common: "Наиболее частый",
        least_common: "Наименее частый",
        distribution: "Распределение",
        by: "от",
    },
    date_formats: DateFormats {
        full: "d MMMM yyyy г.",
        short: "dd.MM.yyyy",
    },
};

// Portuguese (Brazil)
static PT: Messages = Messages {
    commit_types: &[
        ("feat", "🚀 Funcionalidades"),
        ("fix", "🐛 Correções"),
        ("docs", "📚 Documentação"),
        ("style", "💅 Estilos"),
        ("refactor", "♻️ Refatoração"),
        ("perf", "⚡ Melhorias de Performance"),
        ("test", "🧪 Testes"),
        ("build", "📦 Sistema de Build"),
        ("ci", "🤖 Integração Contínua"),
        ("chore", "🧹 Tarefas"),
        ("revert", "⏪ Reversões"),
        ("misc", "📄 Diversos"),
    ],
    labels: Labels {
        changelog: "Registro de Alterações",
        contributors: "Colaboradores",
        breaking_changes: "Mudanças Importantes",
        compare_changes: "Comparar alterações",
        commits: "commits",
        sections: "seções",
        most_active: "Mais ativo",
        new_contributors: "Novos colaboradores",
        top_contributors: "Principais colaboradores",
        repository_stats: "Estatísticas do Repositório",
        commit_frequency: "Frequência de Commits",
        total_days: "Total de dias com commits",
        average_per_day: "Média de commits por dia",
        peak_day: "Dia de pico",
        recent_activity: "Atividade recente",
        range: "Intervalo",
        total_commits: "Total de commits",
        breaking_changes_count: "Mudanças importantes",
        most_common: "Mais comum",
        least_common: "Menos comum",
        distribution: "Distribuição",
        by: "por",
    },
    date_formats: DateFormats {
        full: "d de MMMM de yyyy",
        short: "dd/MM/yyyy",
    },
};

// Italian
static IT: Messages = Messages {
    commit_types: &[
        ("feat", "🚀 Funzionalità"),
        ("fix", "🐛 Correzioni"),
        ("docs", "📚 Documentazione"),
        ("style", "💅 Stili"),
        ("refactor", "♻️ Refactoring"),
        ("perf", "⚡ Miglioramenti delle Prestazioni"),
        ("test", "🧪 Test"),
        ("build", "📦 Sistema di Build"),
        ("ci", "🤖 Integrazione Continua"),
        ("chore", "🧹 Manutenzione"),
        ("revert", "⏪ Rollback"),
        ("misc", "📄 Varie"),
    ],
    labels: Labels {
        changelog: "Registro delle Modifiche",
        contributors: "Collaboratori",
        breaking_changes: "Modifiche Importanti",
        compare_changes: "Confronta modifiche",
        commits: "commit",
        sections: "sezioni",
        most_active: "Più attivo",
        new_contributors: "Nuovi collaboratori",
        top_contributors: "Principali collaboratori",
        repository_stats: "Statistiche del Repository",
        commit_frequency: "Frequenza dei Commit",
        total_days: "Giorni totali con commit",
        average_per_day: "Media commit al giorno",
        peak_day: "Giorno di picco",
        recent_activity: "Attività recente",
        range: "Intervallo",
        total_commits: "Commit totali",
        breaking_changes_count: "Modifiche importanti",
        most_common: "Più comune",
        least_common: "Meno comune",
        distribution: "Distribuzione",
        by: "da",
    },
    date_formats: DateFormats {
        full: "d MMMM yyyy",
        short: "dd/MM/yyyy",
    },
};

/// Get translations for a language
pub fn translations(language: Language) -> &'static Messages {
    match language {
        Language::En => &EN,
        Language::Es => &ES,
        Language::Fr => &FR,
        Language::De => &DE,
        Language::Zh => &ZH,
        Language::Ja => &JA,
        Language::Ko => &KO,
        Language::Ru => &RU,
        Language::Pt => &PT,
        Language::It => &IT,
    }
}

/// Get translated labels for a language
pub fn labels(language: Language) -> &'static Labels {
    &translations(language).labels
}

/// Native name of a language
pub fn native_name(language: Language) -> &'static str {
    match language {
        Language::En => "English",
        Language::Es => "Español",
        Language::Fr => "Français",
        Language::De => "Deutsch",
        Language::Zh => "中文",
        Language::Ja => "日本語",
        Language::Ko => "한국어",
        Language::Ru => "Русский",
        Language::Pt => "Português",
        Language::It => "Italiano",
    }
}

/// Strip leading emoji or symbols from a label
pub fn strip_leading_symbols(text: &str) -> &str {
    match LEADING_SYMBOLS.find(text) {
        Some(m) => &text[m.end()..],
        None => text,
    }
}

/// Commit type name without its emoji, falling back to the `misc` name
pub fn commit_type_text(commit_type: &str, language: Language) -> &'static str {
    let messages = translations(language);
    let text = messages
        .commit_type(commit_type)
        .or_else(|| messages.commit_type("misc"))
        .unwrap_or("Miscellaneous");
    strip_leading_symbols(text)
}

/// Section title for a commit type: theme symbol plus localized name.
///
/// Returns `None` for types the language does not know.
pub fn themed_type_title(commit_type: &str, language: Language, theme: Theme) -> Option<String> {
    let text = strip_leading_symbols(translations(language).commit_type(commit_type)?);
    let emoji = theme_emoji(commit_type, theme);
    Some(if emoji.is_empty() {
        text.to_string()
    } else {
        format!("{} {}", emoji, text)
    })
}

/// Title of the breaking changes section
pub fn breaking_title(language: Language, theme: Theme) -> String {
    let label = labels(language).breaking_changes;
    let emoji = theme_emoji("breaking", theme);
    if emoji.is_empty() {
        label.to_string()
    } else {
        format!("{} {}", emoji, label)
    }
}

fn chrono_locale(language: Language) -> Locale {
    match language {
        Language::En => Locale::en_US,
        Language::Es => Locale::es_ES,
        Language::Fr => Locale::fr_FR,
        Language::De => Locale::de_DE,
        Language::Zh => Locale::zh_CN,
        Language::Ja => Locale::ja_JP,
        Language::Ko => Locale::ko_KR,
        Language::Ru => Locale::ru_RU,
        Language::Pt => Locale::pt_BR,
        Language::It => Locale::it_IT,
    }
}

/// Translate a date pattern into a strftime format string
fn to_strftime(pattern: &str) -> String {
    let mut out = String::with_capacity(pattern.len() * 2);
    let mut last = 0;

    for token in DATE_TOKEN.find_iter(pattern) {
        out.push_str(&pattern[last..token.start()].replace('%', "%%"));
        out.push_str(match token.as_str() {
            "yyyy" => "%Y",
            "MMMM" => "%B",
            "MM" => "%m",
            "M" => "%-m",
            "dd" => "%d",
            "d" => "%-d",
            literal => literal,
        });
        last = token.end();
    }
    out.push_str(&pattern[last..].replace('%', "%%"));
    out
}

fn parse_date(date: &str) -> Option<NaiveDate> {
    let date = date.trim();
    NaiveDate::parse_from_str(date, "%Y-%m-%d")
        .ok()
        .or_else(|| DateTime::parse_from_rfc3339(date).ok().map(|dt| dt.date_naive()))
        .or_else(|| {
            DateTime::parse_from_str(date, "%Y-%m-%d %H:%M:%S %z")
                .ok()
                .map(|dt| dt.date_naive())
        })
}

/// Format a date string in a language's full or short pattern.
///
/// Input that is not a recognizable date is returned unchanged.
pub fn format_date(date: &str, language: Language, style: DateStyle) -> String {
    let Some(naive) = parse_date(date) else {
        return date.to_string();
    };
    let Some(midnight) = naive.and_hms_opt(0, 0, 0) else {
        return date.to_string();
    };

    let formats = translations(language).date_formats;
    let pattern = match style {
        DateStyle::Full => formats.full,
        DateStyle::Short => formats.short,
    };

    midnight
        .and_utc()
        .format_localized(&to_strftime(pattern), chrono_locale(language))
        .to_string()
}
