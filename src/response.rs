//! 响应校验模块 - 检查 API 响应外层结构是否符合契约
//!
//! 这里只做信封级校验（外层是字典、homeworks 是列表），
//! 单条记录的字段校验推迟到状态解析阶段。

use crate::error::PollError;
use serde_json::Value;

/// 校验响应外层结构，返回作业记录列表
///
/// 列表原样返回，不做深度校验。
pub fn check_response(raw: &Value) -> Result<&Vec<Value>, PollError> {
    let map = raw
        .as_object()
        .ok_or(PollError::Shape("получен список вместо ожидаемого словаря"))?;

    let homeworks = map
        .get("homeworks")
        .ok_or(PollError::MissingKey("homeworks"))?;

    homeworks
        .as_array()
        .ok_or(PollError::Shape("данные приходят не в виде списка"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_well_formed_envelope() {
        let raw = json!({
            "homeworks": [{"homework_name": "hw1", "status": "approved"}],
            "current_date": 1000,
        });
        let homeworks = check_response(&raw).unwrap();
        assert_eq!(homeworks.len(), 1);
    }

    #[test]
    fn test_empty_list_is_valid() {
        let raw = json!({"homeworks": [], "current_date": 2000});
        assert!(check_response(&raw).unwrap().is_empty());
    }

    #[test]
    fn test_top_level_not_an_object() {
        // 服务端有时返回列表而不是字典
        let raw = json!([{"homeworks": []}]);
        assert!(matches!(check_response(&raw), Err(PollError::Shape(_))));
    }

    #[test]
    fn test_missing_homeworks_key() {
        let raw = json!({"current_date": 1000});
        assert!(matches!(
            check_response(&raw),
            Err(PollError::MissingKey("homeworks"))
        ));
    }

    #[test]
    fn test_homeworks_not_a_list() {
        let raw = json!({"homeworks": {"homework_name": "hw1"}});
        assert!(matches!(check_response(&raw), Err(PollError::Shape(_))));
    }
}
