//! 预导入模块，方便使用

pub use super::assignments::{
    ActiveModel as AssignmentActiveModel, Entity as Assignments, Model as AssignmentModel,
};
pub use super::course_registrations::{
    ActiveModel as CourseRegistrationActiveModel, Entity as CourseRegistrations,
    Model as CourseRegistrationModel,
};
pub use super::courses::{
    ActiveModel as CourseActiveModel, Entity as Courses, Model as CourseModel,
};
pub use super::deliverables::{
    ActiveModel as DeliverableActiveModel, Entity as Deliverables, Model as DeliverableModel,
};
pub use super::effort_log_line_items::{
    ActiveModel as EffortLogLineItemActiveModel, Entity as EffortLogLineItems,
    Model as EffortLogLineItemModel,
};
pub use super::grades::{ActiveModel as GradeActiveModel, Entity as Grades, Model as GradeModel};
pub use super::grading_rules::{
    ActiveModel as GradingRuleActiveModel, Entity as GradingRules, Model as GradingRuleModel,
};
pub use super::team_members::{
    ActiveModel as TeamMemberActiveModel, Entity as TeamMembers, Model as TeamMemberModel,
};
pub use super::teams::{ActiveModel as TeamActiveModel, Entity as Teams, Model as TeamModel};
pub use super::users::{ActiveModel as UserActiveModel, Entity as Users, Model as UserModel};
