//! 作业提交
//!
//! 流程：写作业脚本 → 提交到批处理队列。两步顺序执行，提交失败时脚本保留在磁盘上，不回滚、不重试。

pub mod queue;
pub mod request;
pub mod script;

pub use queue::{BatchQueue, DryRunQueue, JobId, QsubQueue};
pub use request::{JobRequest, WallTime, USAGE};
pub use script::JobScript;

use crate::config::Config;
use crate::error::AppResult;
use tracing::{error, info};

/// 写出作业脚本并提交
pub fn launch_job(
    config: &Config,
    request: &JobRequest,
    queue: &dyn BatchQueue,
) -> AppResult<JobId> {
    let working_dir = config.working_dir()?;
    let script = JobScript::render(
        &config.job.script_name,
        &working_dir,
        &config.job.executable,
        request,
    );
    script.write()?;

    info!(
        "📄 作业脚本: {} ({} {} {})",
        script.path.display(),
        request.year,
        request.region,
        request.process
    );

    match queue.submit(&script.path, &request.wall_time) {
        Ok(job_id) => {
            info!("✓ 已提交作业 {} (walltime={})", job_id, request.wall_time);
            Ok(job_id)
        }
        Err(e) => {
            error!("❌ 提交失败，脚本保留在 {}: {}", script.path.display(), e);
            Err(e)
        }
    }
}
