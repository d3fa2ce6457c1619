//! 评审结论映射 - 状态码到人类可读文案

/// 根据状态码查找评审结论文案
///
/// 返回 `None` 表示未知状态，调用方将其视为硬错误，
/// 未知状态永远不会被静默接受。
pub fn verdict(status: &str) -> Option<&'static str> {
    match status {
        "approved" => Some("Работа проверена: ревьюеру всё понравилось. Ура!"),
        "reviewing" => Some("Работа взята на проверку ревьюером."),
        "rejected" => Some("Работа проверена: у ревьюера есть замечания."),
        _ => None,
    }
}
