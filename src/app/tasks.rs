// src/app/tasks.rs: remote calls off the UI thread, results back over a channel
use std::sync::mpsc::{self, Receiver, Sender, TryRecvError};
use std::sync::Arc;

use tracing::debug;

use super::data::MovieDraft;
use super::remote::MovieApi;
use super::types::RemoteMsg;

/// Called by a worker after it has posted its result (e.g. request a repaint).
pub type Waker = Arc<dyn Fn() + Send + Sync>;

pub struct RemoteTasks {
    api: Arc<dyn MovieApi>,
    tx: Sender<RemoteMsg>,
    rx: Receiver<RemoteMsg>,
    waker: Option<Waker>,
    in_flight: usize,
}

impl RemoteTasks {
    pub fn new(api: Arc<dyn MovieApi>) -> Self {
        let (tx, rx) = mpsc::channel::<RemoteMsg>();
        Self {
            api,
            tx,
            rx,
            waker: None,
            in_flight: 0,
        }
    }

    pub fn with_waker(mut self, waker: Waker) -> Self {
        self.waker = Some(waker);
        self
    }

    pub fn in_flight(&self) -> usize {
        self.in_flight
    }

    pub fn spawn_load(&mut self) {
        self.spawn("load", |api| RemoteMsg::Loaded(api.list_movies()));
    }

    pub fn spawn_create(&mut self, draft: MovieDraft) {
        self.spawn("create", move |api| RemoteMsg::Created(api.create_movie(&draft)));
    }

    pub fn spawn_delete(&mut self, id: i64) {
        self.spawn("delete", move |api| RemoteMsg::Deleted {
            id,
            result: api.delete_movie(id),
        });
    }

    pub fn spawn_details(&mut self, id: i64) {
        self.spawn("details", move |api| RemoteMsg::Details {
            id,
            result: api.get_movie(id),
        });
    }

    fn spawn<F>(&mut self, what: &'static str, job: F)
    where
        F: FnOnce(&dyn MovieApi) -> RemoteMsg + Send + 'static,
    {
        let api = Arc::clone(&self.api);
        let tx = self.tx.clone();
        let waker = self.waker.clone();
        self.in_flight += 1;
        debug!("dispatch {what} ({} in flight)", self.in_flight);

        std::thread::spawn(move || {
            let msg = job(api.as_ref());
            if tx.send(msg).is_err() {
                debug!("{what}: receiver gone, result dropped");
                return;
            }
            if let Some(wake) = waker {
                wake();
            }
        });
    }

    /// Takes up to `max` finished results in arrival order without blocking.
    pub fn drain(&mut self, max: usize) -> Vec<RemoteMsg> {
        let mut out = Vec::new();
        while out.len() < max {
            match self.rx.try_recv() {
                Ok(msg) => out.push(msg),
                Err(TryRecvError::Empty) | Err(TryRecvError::Disconnected) => break,
            }
        }
        self.in_flight = self.in_flight.saturating_sub(out.len());
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::testing::{failure, movie, sample_movies, ScriptedApi};
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::time::{Duration, Instant};

    fn wait_for(tasks: &mut RemoteTasks, count: usize) -> Vec<RemoteMsg> {
        let deadline = Instant::now() + Duration::from_secs(5);
        let mut got = Vec::new();
        while got.len() < count && Instant::now() < deadline {
            got.extend(tasks.drain(count - got.len()));
            std::thread::sleep(Duration::from_millis(5));
        }
        got
    }

    #[test]
    fn load_result_comes_back() {
        let api = Arc::new(ScriptedApi::default().list(Ok(sample_movies())));
        let mut tasks = RemoteTasks::new(api);
        tasks.spawn_load();
        assert_eq!(tasks.in_flight(), 1);

        let msgs = wait_for(&mut tasks, 1);
        assert_eq!(tasks.in_flight(), 0);
        match &msgs[..] {
            [RemoteMsg::Loaded(Ok(movies))] => assert_eq!(movies.len(), 2),
            _ => panic!("unexpected messages"),
        }
    }

    #[test]
    fn delete_and_details_carry_their_id() {
        let api = Arc::new(
            ScriptedApi::default()
                .delete(Err(failure("DELETE")))
                .get(Ok(movie(4, "Four"))),
        );
        let mut tasks = RemoteTasks::new(api);
        tasks.spawn_delete(7);
        let msgs = wait_for(&mut tasks, 1);
        assert!(matches!(msgs.as_slice(), [RemoteMsg::Deleted { id: 7, result: Err(_) }]));

        tasks.spawn_details(4);
        let msgs = wait_for(&mut tasks, 1);
        assert_eq!(msgs[0].kind(), "details");
    }

    #[test]
    fn waker_fires_after_each_result() {
        let woken = Arc::new(AtomicUsize::new(0));
        let api = Arc::new(ScriptedApi::default().create(Ok(movie(3, "New Movie"))));
        let mut tasks = RemoteTasks::new(api).with_waker({
            let woken = woken.clone();
            Arc::new(move || {
                woken.fetch_add(1, Ordering::SeqCst);
            })
        });
        tasks.spawn_create(MovieDraft {
            title: "New Movie".into(),
            ..Default::default()
        });
        let msgs = wait_for(&mut tasks, 1);
        assert!(matches!(msgs.as_slice(), [RemoteMsg::Created(Ok(_))]));
        // The wake happens right after the send; give it a moment.
        let deadline = Instant::now() + Duration::from_secs(2);
        while woken.load(Ordering::SeqCst) == 0 && Instant::now() < deadline {
            std::thread::sleep(Duration::from_millis(5));
        }
        assert_eq!(woken.load(Ordering::SeqCst), 1);
    }
}
