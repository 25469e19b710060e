//! Host collaborators: snapshotting render surfaces, saving files and
//! surfacing notices to the user.
//!
//! The engine never rasterizes or downloads anything itself. Hosts plug in
//! their own implementations; the ones here cover tests, dry runs and the
//! command-line tool.

pub mod download;
pub mod notice;
pub mod snapshot;

pub use download::{DirDownloader, Downloader, MemoryDownloader};
pub use notice::{LogNotifier, Notice, Notifier, RecordingNotifier};
pub use snapshot::{NoopSnapshotter, PlanSnapshotter, Snapshotter};

#[cfg(test)]
mod tests {
    use super::*;
    use crate::export::{Placement, SurfaceId};
    use crate::layout::SectionRef;

    #[tokio::test]
    async fn noop_collaborators_accept_everything() {
        let snap = NoopSnapshotter::new();
        let id = SurfaceId::for_section(SectionRef::Main, Placement::Preview);
        assert!(snap.snapshot(&id).await.unwrap().is_empty());

        let dl = MemoryDownloader::new();
        dl.save(b"x", "a.png");
        assert_eq!(dl.file_names(), vec!["a.png".to_string()]);

        let notifier = RecordingNotifier::new();
        notifier.notify(Notice::AssistantFailed { reason: "boom".into() });
        assert_eq!(notifier.notices().len(), 1);
    }
}
