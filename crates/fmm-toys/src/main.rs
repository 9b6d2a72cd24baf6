//! Two named worker threads each print a message, run a small transform job, and report back.

use std::io;

use anyhow::Context;
use fmm_linalg::vec3;
use fmm_toys::{scaling, translation, Job, JobOutput};
use pawawwewism::{promise, Promise, Worker};

struct WorkerParams {
    job: Job,
    output: Promise<JobOutput>,
}

fn main() -> anyhow::Result<()> {
    fmm_toys::init_logger!();

    let mut thread1 = job_worker("thread 1").context("failed to spawn thread 1")?;
    let mut thread2 = job_worker("thread 2").context("failed to spawn thread 2")?;

    let job1 = Job::from_env(
        "FMM_TOYS_MESSAGE_1",
        "Thread 1",
        translation(vec3(1.0, 2.0, 3.0)),
        vec3(1.0, 1.0, 1.0),
    );
    let job2 = Job::from_env(
        "FMM_TOYS_MESSAGE_2",
        "Thread 2",
        translation(vec3(-1.0, 0.0, 0.5)) * scaling(vec3(2.0, 2.0, 2.0)),
        vec3(1.0, 1.0, 1.0),
    );

    let (output1, handle1) = promise();
    let (output2, handle2) = promise();
    thread1.send(WorkerParams {
        job: job1,
        output: output1,
    });
    thread2.send(WorkerParams {
        job: job2,
        output: output2,
    });

    let ret1 = handle1
        .block()
        .ok()
        .context("thread 1 exited without a result")?;
    let ret2 = handle2
        .block()
        .ok()
        .context("thread 2 exited without a result")?;

    log::info!("thread 1 returns: {} (det {})", ret1.point, ret1.det);
    log::info!("thread 2 returns: {} (det {})", ret2.point, ret2.det);

    Ok(())
}

fn job_worker(name: &str) -> Result<Worker<WorkerParams>, io::Error> {
    Worker::builder()
        .name(name)
        .spawn(move |WorkerParams { job, output }| {
            log::info!("{}", job.message);
            let out = job.run();
            log::trace!("{:?} -> {:?}", job.point, out);
            output.fulfill(out);
        })
}
