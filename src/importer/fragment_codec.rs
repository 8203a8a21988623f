// ==========================================
// XmrStak 挖矿控制台 - 配置片段编解码器
// ==========================================
// 职责: 无大括号片段体 ↔ 结构化负载的互转
// ==========================================
// 历史约束: 矿工的 config.txt 是对象体,不带外层大括号,
//           解码前需人工补齐 { },编码后再剥除
// ==========================================

use crate::importer::error::{ImportError, ImportResult};
use serde_json::Value;

/// 解码片段文本为结构化负载
///
/// # 参数
/// - text: 无大括号的对象体（config.txt 原始内容）
///
/// # 返回
/// - Ok(Value): 解析后的负载
/// - Err(ImportError::MalformedFragment): 文本无法解析
pub fn decode_fragment(text: &str) -> ImportResult<Value> {
    // 补齐外层大括号后交给结构化文档解析器
    let wrapped = format!("{{{}}}", text);
    serde_json::from_str(&wrapped).map_err(|e| ImportError::MalformedFragment(e.to_string()))
}

/// 编码负载为片段文本
///
/// # 返回
/// - 缩进格式序列化后剥除最外层一对大括号与首尾空白的对象体,
///   可直接写回 config.txt
pub fn encode_fragment(payload: &Value) -> ImportResult<String> {
    let text = serde_json::to_string_pretty(payload)
        .map_err(|e| ImportError::InternalError(format!("负载序列化失败: {}", e)))?;

    // 红线: 只剥除最外层一对大括号,嵌套对象的大括号必须保留
    let body = text
        .strip_prefix('{')
        .and_then(|t| t.strip_suffix('}'))
        .unwrap_or(&text);
    Ok(body.trim().to_string())
}
