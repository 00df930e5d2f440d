mod jobs;
mod skills;

pub use jobs::{Job, Role};
pub use skills::{
    SKILLS, SkillInfo, TRACKABLE_COOLDOWN_SECS, get_skill_by_id, skills_for_job, trackable_skills,
};
