use std::thread;

use tracing::debug;

use crate::redfish::loader::HostDir;

/// Run `collect` for every host and return the records in host order.
///
/// With `jobs > 1` the hosts are split into contiguous chunks, one scoped
/// thread per chunk; chunks are concatenated in order, so the output never
/// depends on which thread finishes first.
pub fn collect_all<R, F>(hosts: &[HostDir], jobs: usize, collect: F) -> Vec<R>
where
    R: Send,
    F: Fn(&HostDir) -> R + Sync,
{
    let jobs = jobs.clamp(1, hosts.len().max(1));
    if jobs == 1 {
        return hosts.iter().map(&collect).collect();
    }

    let chunk_size = hosts.len().div_ceil(jobs);
    debug!(hosts = hosts.len(), jobs, chunk_size, "collecting in parallel");

    let collect = &collect;
    thread::scope(|scope| {
        let workers: Vec<_> = hosts
            .chunks(chunk_size)
            .map(|chunk| scope.spawn(move || chunk.iter().map(collect).collect::<Vec<R>>()))
            .collect();

        workers
            .into_iter()
            .flat_map(|worker| match worker.join() {
                Ok(records) => records,
                Err(panic) => std::panic::resume_unwind(panic),
            })
            .collect()
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn hosts(count: usize) -> Vec<HostDir> {
        (0..count)
            .map(|i| HostDir::new("dc", format!("node-{:02}", i), format!("/tmp/dc/node-{:02}", i)))
            .collect()
    }

    #[test]
    fn test_parallel_output_keeps_host_order() {
        let hosts = hosts(23);
        let sequential = collect_all(&hosts, 1, |h| h.label());
        for jobs in [2, 4, 7, 64] {
            assert_eq!(collect_all(&hosts, jobs, |h| h.label()), sequential);
        }
    }

    #[test]
    fn test_no_hosts() {
        let records: Vec<String> = collect_all(&[], 8, |h| h.label());
        assert!(records.is_empty());
    }
}
