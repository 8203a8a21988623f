// ==========================================
// XmrStak 挖矿控制台 - 结构等价比较引擎
// ==========================================
// 职责: 配置负载的深度结构等价判定
// 输入: 任意嵌套的标量/序列/复合记录 (serde_json::Value)
// 输出: bool,无副作用
// ==========================================
// 红线: name 字段不参与配置等价判定
// 红线: 序列长度不同即不等价（双向,不依赖遍历方向）
// ==========================================

use crate::domain::catalog::Configuration;
use serde_json::Value;

/// 深度结构等价
///
/// # 规则
/// 1. 运行时形状不同 → 不等价
/// 2. 标量 → 原生值等价
/// 3. 序列 → 先比较长度,再逐元素递归比较
/// 4. 复合记录 → 按成员名配对递归比较,成员集合必须一致
///
/// # 说明
/// 负载是无环文档,无需循环防护
pub fn deep_equal(left: &Value, right: &Value) -> bool {
    match (left, right) {
        (Value::Null, Value::Null) => true,
        (Value::Bool(l), Value::Bool(r)) => l == r,
        (Value::Number(l), Value::Number(r)) => l == r,
        (Value::String(l), Value::String(r)) => l == r,
        (Value::Array(l), Value::Array(r)) => {
            // 长度等价是显式前置条件,右侧多出的尾部元素同样判不等
            if l.len() != r.len() {
                return false;
            }
            l.iter().zip(r.iter()).all(|(lv, rv)| deep_equal(lv, rv))
        }
        (Value::Object(l), Value::Object(r)) => {
            if l.len() != r.len() {
                return false;
            }
            l.iter()
                .all(|(key, lv)| r.get(key).is_some_and(|rv| deep_equal(lv, rv)))
        }
        // 形状不同
        _ => false,
    }
}

/// 槽位等价: 两侧均缺失视为等价,仅一侧缺失视为不等价
pub fn slot_equal(left: Option<&Value>, right: Option<&Value>) -> bool {
    match (left, right) {
        (None, None) => true,
        (Some(lv), Some(rv)) => deep_equal(lv, rv),
        _ => false,
    }
}

/// 配置等价: CPU/AMD/NVIDIA 三个槽位逐一等价,name 排除在外
pub fn equal_configurations(left: &Configuration, right: &Configuration) -> bool {
    slot_equal(left.cpu.as_ref(), right.cpu.as_ref())
        && slot_equal(left.amd.as_ref(), right.amd.as_ref())
        && slot_equal(left.nvidia.as_ref(), right.nvidia.as_ref())
}
