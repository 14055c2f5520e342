use serde::{Deserialize, Serialize};

// 学期
//
// 顺序即时间顺序：Spring < Summer < Fall，配合年份比较注册课程的新旧。
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq, PartialOrd, Ord)]
#[serde(rename_all = "snake_case")]
pub enum Semester {
    Spring, // 春季（1-5 月）
    Summer, // 夏季（6-8 月）
    Fall,   // 秋季（9-12 月）
}

impl Semester {
    pub const SPRING: &'static str = "spring";
    pub const SUMMER: &'static str = "summer";
    pub const FALL: &'static str = "fall";

    /// 由月份推导学期
    pub fn from_month(month: u32) -> Self {
        match month {
            1..=5 => Semester::Spring,
            6..=8 => Semester::Summer,
            _ => Semester::Fall,
        }
    }
}

impl<'de> Deserialize<'de> for Semester {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        match s.as_str() {
            Semester::SPRING => Ok(Semester::Spring),
            Semester::SUMMER => Ok(Semester::Summer),
            Semester::FALL => Ok(Semester::Fall),
            _ => Err(serde::de::Error::custom(format!(
                "无效的学期: '{s}'. 支持的学期: spring, summer, fall"
            ))),
        }
    }
}

impl std::fmt::Display for Semester {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Semester::Spring => write!(f, "{}", Semester::SPRING),
            Semester::Summer => write!(f, "{}", Semester::SUMMER),
            Semester::Fall => write!(f, "{}", Semester::FALL),
        }
    }
}

impl std::str::FromStr for Semester {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "spring" => Ok(Semester::Spring),
            "summer" => Ok(Semester::Summer),
            "fall" => Ok(Semester::Fall),
            _ => Err(format!("Invalid semester: {s}")),
        }
    }
}

/// 学年学期，(year, semester) 的字典序即时间先后
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord)]
pub struct AcademicTerm {
    pub year: i32,
    pub semester: Semester,
}

impl AcademicTerm {
    pub fn new(year: i32, semester: Semester) -> Self {
        Self { year, semester }
    }

    /// 取给定时刻所在的学期
    pub fn of(datetime: chrono::DateTime<chrono::Utc>) -> Self {
        use chrono::Datelike;
        Self {
            year: datetime.year(),
            semester: Semester::from_month(datetime.month()),
        }
    }

    /// 取当前学期
    pub fn current() -> Self {
        Self::of(chrono::Utc::now())
    }
}

// 评分方式
#[derive(Debug, Clone, Copy, Serialize, PartialEq)]
#[serde(rename_all = "snake_case")]
pub enum GradeType {
    Points,  // 按分数
    Weights, // 按权重
    Letter,  // 按等级
}

impl GradeType {
    pub const POINTS: &'static str = "points";
    pub const WEIGHTS: &'static str = "weights";
    pub const LETTER: &'static str = "letter";
}

impl<'de> Deserialize<'de> for GradeType {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        match s.as_str() {
            GradeType::POINTS => Ok(GradeType::Points),
            GradeType::WEIGHTS => Ok(GradeType::Weights),
            GradeType::LETTER => Ok(GradeType::Letter),
            _ => Err(serde::de::Error::custom(format!(
                "无效的评分方式: '{s}'. 支持的方式: points, weights, letter"
            ))),
        }
    }
}

impl std::fmt::Display for GradeType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            GradeType::Points => write!(f, "{}", GradeType::POINTS),
            GradeType::Weights => write!(f, "{}", GradeType::WEIGHTS),
            GradeType::Letter => write!(f, "{}", GradeType::LETTER),
        }
    }
}

impl std::str::FromStr for GradeType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "points" => Ok(GradeType::Points),
            "weights" => Ok(GradeType::Weights),
            "letter" => Ok(GradeType::Letter),
            _ => Err(format!("Invalid grade type: {s}")),
        }
    }
}

// 展示用词：课程把作业叫 assignment 还是 deliverable
#[derive(Debug, Clone, Copy, Serialize, PartialEq)]
#[serde(rename_all = "snake_case")]
pub enum Nomenclature {
    Assignment,
    Deliverable,
}

impl Nomenclature {
    pub const ASSIGNMENT: &'static str = "assignment";
    pub const DELIVERABLE: &'static str = "deliverable";

    pub fn as_str(&self) -> &'static str {
        match self {
            Nomenclature::Assignment => Nomenclature::ASSIGNMENT,
            Nomenclature::Deliverable => Nomenclature::DELIVERABLE,
        }
    }
}

impl<'de> Deserialize<'de> for Nomenclature {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        match s.as_str() {
            Nomenclature::ASSIGNMENT => Ok(Nomenclature::Assignment),
            Nomenclature::DELIVERABLE => Ok(Nomenclature::Deliverable),
            _ => Err(serde::de::Error::custom(format!(
                "无效的作业称谓: '{s}'. 支持的称谓: assignment, deliverable"
            ))),
        }
    }
}

impl std::fmt::Display for Nomenclature {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for Nomenclature {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "assignment" => Ok(Nomenclature::Assignment),
            "deliverable" => Ok(Nomenclature::Deliverable),
            _ => Err(format!("Invalid nomenclature: {s}")),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Course {
    // 唯一 ID
    pub id: i64,
    // 课程名称
    pub name: String,
    // 课程编号，如 "96-700"
    pub number: Option<String>,
    // 开课学年
    pub year: i32,
    // 开课学期
    pub semester: Semester,
    pub created_at: chrono::DateTime<chrono::Utc>,
    pub updated_at: chrono::DateTime<chrono::Utc>,
}

impl Course {
    /// 课程所属的学年学期
    pub fn term(&self) -> AcademicTerm {
        AcademicTerm::new(self.year, self.semester)
    }
}

/// 课程评分规则，缺失表示课程未配置评分方式
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GradingRule {
    pub id: i64,
    pub course_id: i64,
    pub grade_type: GradeType,
    pub nomenclature: Nomenclature,
    pub created_at: chrono::DateTime<chrono::Utc>,
    pub updated_at: chrono::DateTime<chrono::Utc>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_semester_from_month() {
        assert_eq!(Semester::from_month(1), Semester::Spring);
        assert_eq!(Semester::from_month(5), Semester::Spring);
        assert_eq!(Semester::from_month(6), Semester::Summer);
        assert_eq!(Semester::from_month(8), Semester::Summer);
        assert_eq!(Semester::from_month(9), Semester::Fall);
        assert_eq!(Semester::from_month(12), Semester::Fall);
    }

    #[test]
    fn test_term_ordering() {
        let spring_2025 = AcademicTerm::new(2025, Semester::Spring);
        let fall_2025 = AcademicTerm::new(2025, Semester::Fall);
        let spring_2026 = AcademicTerm::new(2026, Semester::Spring);

        assert!(spring_2025 < fall_2025);
        assert!(fall_2025 < spring_2026);
        assert_eq!(spring_2026, AcademicTerm::new(2026, Semester::Spring));
    }

    #[test]
    fn test_term_of_datetime() {
        use chrono::TimeZone;
        let date = chrono::Utc.with_ymd_and_hms(2026, 3, 15, 12, 0, 0).unwrap();
        assert_eq!(
            AcademicTerm::of(date),
            AcademicTerm::new(2026, Semester::Spring)
        );
    }

    #[test]
    fn test_semester_round_trip() {
        assert_eq!("fall".parse::<Semester>().unwrap(), Semester::Fall);
        assert_eq!(Semester::Summer.to_string(), "summer");
        assert!("winter".parse::<Semester>().is_err());
    }
}
