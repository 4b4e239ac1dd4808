//! AutoCAD DXF 版本定义
//!
//! `$ACADVER` 头变量的取值。AC1009 (R12) 是新旧方言的分界：
//! 句柄组码 (5/105) 和子类标记 (100) 仅在更高版本输出。

/// AutoCAD 版本号，按发布顺序排列
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub enum AcadVer {
    /// AutoCAD R10
    AC1006,
    /// AutoCAD R12 - 句柄/子类标记的版本门槛
    AC1009,
    /// AutoCAD R13
    AC1012,
    /// AutoCAD R14
    AC1014,
    /// AutoCAD 2000（默认目标）
    #[default]
    AC1015,
    /// AutoCAD 2004
    AC1018,
    /// AutoCAD 2007
    AC1021,
    /// AutoCAD 2010
    AC1024,
    /// AutoCAD 2013
    AC1027,
}

impl AcadVer {
    pub fn as_str(&self) -> &'static str {
        match self {
            AcadVer::AC1006 => "AC1006",
            AcadVer::AC1009 => "AC1009",
            AcadVer::AC1012 => "AC1012",
            AcadVer::AC1014 => "AC1014",
            AcadVer::AC1015 => "AC1015",
            AcadVer::AC1018 => "AC1018",
            AcadVer::AC1021 => "AC1021",
            AcadVer::AC1024 => "AC1024",
            AcadVer::AC1027 => "AC1027",
        }
    }

    /// 是否输出句柄与子类标记
    pub fn versioned(&self) -> bool {
        *self > AcadVer::AC1009
    }
}
