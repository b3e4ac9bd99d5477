// Skill-to-job matching. `matcher` is pure; `handlers` wires it to the job source.

pub mod handlers;
pub mod matcher;
pub mod skills;
