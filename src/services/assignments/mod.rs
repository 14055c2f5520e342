pub mod create;
pub mod delete;
pub mod display;
pub mod list;
pub mod reposition;
pub mod student;
pub mod update;

use std::sync::Arc;

use crate::errors::Result;
use crate::models::assignments::{
    entities::{Assignment, AssignmentScope},
    requests::{CreateAssignmentRequest, UpdateAssignmentRequest},
};
use crate::models::deliverables::entities::Deliverable;
use crate::models::grades::entities::Grade;
use crate::storage::Storage;

pub struct AssignmentService {
    storage: Arc<dyn Storage>,
}

impl AssignmentService {
    pub fn new(storage: Arc<dyn Storage>) -> Self {
        Self { storage }
    }

    pub(crate) fn storage(&self) -> &Arc<dyn Storage> {
        &self.storage
    }

    pub async fn create_assignment(&self, req: CreateAssignmentRequest) -> Result<Assignment> {
        create::create_assignment(self, req).await
    }

    pub async fn update_assignment(
        &self,
        assignment_id: i64,
        req: UpdateAssignmentRequest,
    ) -> Result<Option<Assignment>> {
        update::update_assignment(self, assignment_id, req).await
    }

    pub async fn delete_assignment(&self, assignment_id: i64) -> Result<bool> {
        delete::delete_assignment(self, assignment_id).await
    }

    pub async fn verify_deliverables_submitted(&self, assignment_id: i64) -> Result<bool> {
        delete::verify_deliverables_submitted(self, assignment_id).await
    }

    pub async fn reposition_assignments(&self, ids: &[i64]) -> Result<()> {
        reposition::reposition_assignments(self, ids).await
    }

    pub async fn list_course_assignments(&self, course_id: i64) -> Result<Vec<Assignment>> {
        list::list_course_assignments(self, course_id).await
    }

    pub async fn fetch_submittable_assignments_by_course(
        &self,
        course_id: i64,
    ) -> Result<Vec<Assignment>> {
        list::fetch_submittable_assignments_by_course(self, course_id).await
    }

    pub async fn list_assignments_for_student(
        &self,
        student_id: i64,
        scope: AssignmentScope,
    ) -> Result<Vec<Assignment>> {
        list::list_assignments_for_student(self, student_id, scope).await
    }

    pub async fn get_student_deliverable(
        &self,
        assignment_id: i64,
        student_id: i64,
    ) -> Result<Option<Deliverable>> {
        student::get_student_deliverable(self, assignment_id, student_id).await
    }

    pub async fn get_student_grade(
        &self,
        assignment_id: i64,
        student_id: i64,
    ) -> Result<Option<Grade>> {
        student::get_student_grade(self, assignment_id, student_id).await
    }

    pub async fn name_with_type(&self, assignment_id: i64) -> Result<String> {
        display::name_with_type(self, assignment_id).await
    }

    pub async fn formatted_maximum_score(&self, assignment_id: i64) -> Result<String> {
        display::formatted_maximum_score(self, assignment_id).await
    }
}
