use marketplace_core::{
    Freelancer, FreelancerDraft, MarketplaceObserver, MarketplaceService, Project, ProjectDraft,
    SqliteMarketplaceRepository,
};
use std::cell::RefCell;
use std::rc::Rc;

#[derive(Default)]
struct RecordedCalls {
    freelancer_batches: Vec<Vec<Freelancer>>,
    project_batches: Vec<Vec<Project>>,
    unavailable_count: usize,
}

struct RecordingObserver {
    calls: Rc<RefCell<RecordedCalls>>,
}

impl RecordingObserver {
    fn boxed() -> (Box<Self>, Rc<RefCell<RecordedCalls>>) {
        let calls = Rc::new(RefCell::new(RecordedCalls::default()));
        let observer = Box::new(Self {
            calls: Rc::clone(&calls),
        });
        (observer, calls)
    }
}

impl MarketplaceObserver for RecordingObserver {
    fn on_freelancers_changed(&self, freelancers: &[Freelancer]) {
        self.calls
            .borrow_mut()
            .freelancer_batches
            .push(freelancers.to_vec());
    }

    fn on_projects_changed(&self, projects: &[Project]) {
        self.calls.borrow_mut().project_batches.push(projects.to_vec());
    }

    fn on_store_unavailable(&self) {
        self.calls.borrow_mut().unavailable_count += 1;
    }
}

#[test]
fn subscribe_replays_both_current_lists() {
    let repo = SqliteMarketplaceRepository::in_memory().unwrap();
    let mut service = MarketplaceService::new(repo);
    service
        .register_freelancer(FreelancerDraft::new("Ani Lestari", "Desainer UI/UX", 45.0, 4.9))
        .unwrap();

    let (observer, calls) = RecordingObserver::boxed();
    service.subscribe(observer);

    let calls = calls.borrow();
    assert_eq!(calls.freelancer_batches.len(), 1);
    assert_eq!(calls.freelancer_batches[0].len(), 1);
    assert_eq!(calls.freelancer_batches[0][0].name, "Ani Lestari");
    assert_eq!(calls.project_batches.len(), 1);
    assert!(calls.project_batches[0].is_empty());
    assert_eq!(calls.unavailable_count, 0);
}

#[test]
fn each_mutation_notifies_exactly_once_for_its_entity() {
    let mut service = MarketplaceService::new(SqliteMarketplaceRepository::in_memory().unwrap());
    let (observer, calls) = RecordingObserver::boxed();
    service.subscribe(observer);

    let id = service
        .register_freelancer(FreelancerDraft::new("Budi Setiawan", "Programmer Java", 50.0, 4.8))
        .unwrap();

    {
        let calls = calls.borrow();
        // one replay batch from subscribe, one from the registration refresh
        assert_eq!(calls.freelancer_batches.len(), 2);
        assert_eq!(calls.project_batches.len(), 1);
    }

    service.remove_freelancer(id).unwrap();

    let calls = calls.borrow();
    assert_eq!(calls.freelancer_batches.len(), 3);
    assert!(calls.freelancer_batches[2].is_empty());
    assert_eq!(calls.project_batches.len(), 1);
}

#[test]
fn project_mutations_notify_project_observers_only() {
    let mut service = MarketplaceService::new(SqliteMarketplaceRepository::in_memory().unwrap());
    let (observer, calls) = RecordingObserver::boxed();
    service.subscribe(observer);

    service
        .post_project(ProjectDraft::new("Desain Logo", "", 500.0, "MulaiApps"))
        .unwrap();

    let calls = calls.borrow();
    assert_eq!(calls.project_batches.len(), 2);
    assert_eq!(calls.project_batches[1].len(), 1);
    assert_eq!(calls.freelancer_batches.len(), 1);
}

#[test]
fn rejected_draft_produces_no_notification() {
    let mut service = MarketplaceService::new(SqliteMarketplaceRepository::in_memory().unwrap());
    let (observer, calls) = RecordingObserver::boxed();
    service.subscribe(observer);

    let _ = service
        .register_freelancer(FreelancerDraft::new("", "Programmer Java", 50.0, 4.8))
        .unwrap_err();

    let calls = calls.borrow();
    assert_eq!(calls.freelancer_batches.len(), 1);
}

#[test]
fn mirror_matches_notified_batch_in_order() {
    let mut service = MarketplaceService::new(SqliteMarketplaceRepository::in_memory().unwrap());
    let (observer, calls) = RecordingObserver::boxed();
    service.subscribe(observer);

    for (name, skill) in [
        ("Budi Setiawan", "Programmer Java"),
        ("Ani Lestari", "Desainer UI/UX"),
        ("Rahmat Hidayat", "Penulis Konten"),
    ] {
        service
            .register_freelancer(FreelancerDraft::new(name, skill, 40.0, 4.5))
            .unwrap();
    }

    let calls = calls.borrow();
    let last_batch = calls.freelancer_batches.last().unwrap();
    assert_eq!(last_batch.as_slice(), service.freelancers());

    let names: Vec<&str> = last_batch.iter().map(|f| f.name.as_str()).collect();
    assert_eq!(names, ["Budi Setiawan", "Ani Lestari", "Rahmat Hidayat"]);
}

#[test]
fn multiple_observers_all_receive_refreshes() {
    let mut service = MarketplaceService::new(SqliteMarketplaceRepository::in_memory().unwrap());
    let (first, first_calls) = RecordingObserver::boxed();
    let (second, second_calls) = RecordingObserver::boxed();
    service.subscribe(first);
    service.subscribe(second);

    service
        .register_freelancer(FreelancerDraft::new("Budi Setiawan", "Programmer Java", 50.0, 4.8))
        .unwrap();

    assert_eq!(first_calls.borrow().freelancer_batches.len(), 2);
    assert_eq!(second_calls.borrow().freelancer_batches.len(), 2);
}
