//! DXF 组码写入器
//!
//! DXF ASCII 格式由交替的行对组成：
//! - 第一行：组码（数字，右对齐宽度 3）
//! - 第二行：值
//!
//! 常用组码：
//! - 0: 实体类型
//! - 2: 名称
//! - 5: 句柄 (Handle)，DIMSTYLE 使用 105
//! - 8: 图层名
//! - 10, 20, 30: X, Y, Z 坐标
//! - 62: 颜色
//! - 100: 子类标记 (Subclass marker)
//! - 210, 220, 230: 拉伸方向
//!
//! 浮点值固定使用与区域设置无关的小数点格式，布尔值写作 `"1"`/`"0"`，
//! 句柄写作大写十六进制。

use crate::version::AcadVer;
use vdraw_path::math::{Point2, Point3, Vector3};

/// 组码-值对缓冲写入器
///
/// 所有写入方法返回 `&mut Self` 以支持链式调用。
/// 句柄与子类标记按目标版本门控：AC1009 及更早版本不输出。
#[derive(Debug, Clone)]
pub struct CodeWriter {
    version: AcadVer,
    lines: Vec<String>,
}

impl CodeWriter {
    pub fn new(version: AcadVer) -> Self {
        Self {
            version,
            lines: Vec::new(),
        }
    }

    pub fn version(&self) -> AcadVer {
        self.version
    }

    /// 写入组码-值对
    pub fn add(&mut self, code: i32, value: impl std::fmt::Display) -> &mut Self {
        self.lines.push(format!("{:>3}", code));
        self.lines.push(value.to_string());
        self
    }

    /// 布尔值写作 "1"/"0"
    pub fn add_bool(&mut self, code: i32, value: bool) -> &mut Self {
        self.add(code, if value { "1" } else { "0" })
    }

    /// 写入句柄（组码 5，大写十六进制），旧版本不输出
    pub fn handle(&mut self, id: u64) -> &mut Self {
        self.handle_code(5, id)
    }

    /// 以指定组码写入句柄（DIMSTYLE 使用组码 105）
    pub fn handle_code(&mut self, code: i32, id: u64) -> &mut Self {
        if self.version.versioned() {
            self.add(code, format!("{:X}", id));
        }
        self
    }

    /// 写入子类标记（组码 100），旧版本不输出
    pub fn subclass(&mut self, name: &str) -> &mut Self {
        if self.version.versioned() {
            self.add(100, name);
        }
        self
    }

    /// 写入二维点（Z 固定为 0）
    pub fn point2(&mut self, base_code: i32, point: Point2) -> &mut Self {
        self.add(base_code, point.x)
            .add(base_code + 10, point.y)
            .add(base_code + 20, 0.0)
    }

    /// 写入三维点
    pub fn point3(&mut self, base_code: i32, point: Point3) -> &mut Self {
        self.add(base_code, point.x)
            .add(base_code + 10, point.y)
            .add(base_code + 20, point.z)
    }

    /// 写入拉伸方向（组码 210/220/230）
    pub fn extrusion(&mut self, direction: Vector3) -> &mut Self {
        self.add(210, direction.x)
            .add(220, direction.y)
            .add(230, direction.z)
    }

    /// 清空缓冲
    pub fn reset(&mut self) {
        self.lines.clear();
    }

    /// 返回累积的文本
    pub fn build(&self) -> String {
        self.lines.join("\n")
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;

    /// 提取输出中偶数行的组码序列
    pub(crate) fn codes(output: &str) -> Vec<i32> {
        output
            .lines()
            .step_by(2)
            .map(|line| line.trim().parse().unwrap())
            .collect()
    }

    #[test]
    fn test_add_pairs() {
        let mut writer = CodeWriter::new(AcadVer::AC1015);
        writer.add(0, "LINE").add(8, "0").add(39, 0.5).add(62, 256);
        let output = writer.build();
        assert_eq!(output, "  0\nLINE\n  8\n0\n 39\n0.5\n 62\n256");
    }

    #[test]
    fn test_add_bool() {
        let mut writer = CodeWriter::new(AcadVer::AC1015);
        writer.add_bool(290, true).add_bool(290, false);
        assert_eq!(writer.build(), "290\n1\n290\n0");
    }

    #[test]
    fn test_handle_hex_and_gating() {
        let mut modern = CodeWriter::new(AcadVer::AC1015);
        modern.handle(255).subclass("AcDbEntity");
        assert_eq!(modern.build(), "  5\nFF\n100\nAcDbEntity");

        let mut legacy = CodeWriter::new(AcadVer::AC1009);
        legacy.handle(255).subclass("AcDbEntity");
        assert_eq!(legacy.build(), "");
    }

    #[test]
    fn test_reset() {
        let mut writer = CodeWriter::new(AcadVer::AC1015);
        writer.add(0, "LINE");
        writer.reset();
        writer.add(0, "TEXT");
        assert_eq!(codes(&writer.build()), vec![0]);
        assert!(writer.build().contains("TEXT"));
    }

    #[test]
    fn test_point_helpers() {
        let mut writer = CodeWriter::new(AcadVer::AC1015);
        writer.point2(10, Point2::new(1.5, 2.5));
        assert_eq!(codes(&writer.build()), vec![10, 20, 30]);

        writer.reset();
        writer.extrusion(Vector3::new(0.0, 0.0, 1.0));
        assert_eq!(codes(&writer.build()), vec![210, 220, 230]);
    }
}
