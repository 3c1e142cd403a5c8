use std::time::{Duration, Instant};

use summit_booklet::{
    Booklet, ResizeDebouncer, SessionRepository, StaticRepository, calculate_statistics,
};
use tokio::sync::mpsc;
use tokio::task::JoinHandle;

use crate::{BookletCommand, BookletUpdate};

/// Owner side of a running booklet worker.
///
/// The worker stops when [`BookletHandle::dispose`] is awaited. Dropping the
/// handle without disposing aborts the worker.
pub struct BookletHandle {
    command_tx: mpsc::UnboundedSender<BookletCommand>,
    update_rx: mpsc::UnboundedReceiver<BookletUpdate>,
    task: Option<JoinHandle<()>>,
}

impl BookletHandle {
    /// Queue a command. Returns `false` once the worker has stopped.
    pub fn send(&self, command: BookletCommand) -> bool {
        self.command_tx.send(command).is_ok()
    }

    pub fn sender(&self) -> mpsc::UnboundedSender<BookletCommand> {
        self.command_tx.clone()
    }

    /// Next update, waiting for one
    pub async fn recv(&mut self) -> Option<BookletUpdate> {
        self.update_rx.recv().await
    }

    /// Next update if one is ready
    pub fn try_recv(&mut self) -> Option<BookletUpdate> {
        self.update_rx.try_recv().ok()
    }

    /// Stop the worker and wait for it to finish
    pub async fn dispose(mut self) {
        let _ = self.command_tx.send(BookletCommand::Shutdown);
        if let Some(task) = self.task.take() {
            if let Err(e) = task.await {
                log::warn!("Booklet worker ended abnormally: {}", e);
            }
        }
    }
}

impl Drop for BookletHandle {
    fn drop(&mut self) {
        if let Some(task) = self.task.take() {
            task.abort();
        }
    }
}

/// Start a worker for `booklet` on the current tokio runtime
pub fn spawn_booklet(booklet: Booklet<StaticRepository>, debounce: Duration) -> BookletHandle {
    spawn_booklet_on(&tokio::runtime::Handle::current(), booklet, debounce)
}

/// Start a worker for `booklet` on the given runtime
pub fn spawn_booklet_on(
    runtime: &tokio::runtime::Handle,
    booklet: Booklet<StaticRepository>,
    debounce: Duration,
) -> BookletHandle {
    let (command_tx, command_rx) = mpsc::unbounded_channel();
    let (update_tx, update_rx) = mpsc::unbounded_channel();

    let task = runtime.spawn(worker_task(booklet, debounce, command_rx, update_tx));

    BookletHandle {
        command_tx,
        update_rx,
        task: Some(task),
    }
}

/// Async worker task that owns the booklet and applies commands in order.
///
/// Resizes are held back until the viewport has been quiet for `debounce`,
/// then only the latest width is applied.
pub async fn worker_task(
    mut booklet: Booklet<StaticRepository>,
    debounce: Duration,
    mut command_rx: mpsc::UnboundedReceiver<BookletCommand>,
    update_tx: mpsc::UnboundedSender<BookletUpdate>,
) {
    let mut debouncer = ResizeDebouncer::new(debounce);

    loop {
        let deadline = debouncer.deadline();
        let wake_at = deadline
            .map(tokio::time::Instant::from_std)
            .unwrap_or_else(tokio::time::Instant::now);

        tokio::select! {
            cmd = command_rx.recv() => {
                match cmd {
                    None | Some(BookletCommand::Shutdown) => break,
                    Some(BookletCommand::Resize { width_px }) => {
                        debouncer.push(width_px, Instant::now());
                        // Coalesce resizes that are already queued
                        while let Ok(next_cmd) = command_rx.try_recv() {
                            match next_cmd {
                                BookletCommand::Resize { width_px } => {
                                    log::trace!("Coalescing queued resize to {}px", width_px);
                                    debouncer.push(width_px, Instant::now());
                                }
                                BookletCommand::Shutdown => return,
                                other => {
                                    process_command(other, &mut booklet, &update_tx).await;
                                }
                            }
                        }
                    }
                    Some(cmd) => process_command(cmd, &mut booklet, &update_tx).await,
                }
            }
            _ = tokio::time::sleep_until(wake_at), if deadline.is_some() => {
                if let Some(width_px) = debouncer.flush() {
                    apply_resize(width_px, &mut booklet, &update_tx);
                }
            }
        }
    }

    log::debug!("Booklet worker stopped");
}

fn apply_resize(
    width_px: f32,
    booklet: &mut Booklet<StaticRepository>,
    update_tx: &mpsc::UnboundedSender<BookletUpdate>,
) {
    if booklet.resize(width_px) {
        let _ = update_tx.send(BookletUpdate::LayoutChanged {
            layout: booklet.layout(),
        });
        send_spread(booklet, update_tx);
    }
}

fn send_spread(
    booklet: &Booklet<StaticRepository>,
    update_tx: &mpsc::UnboundedSender<BookletUpdate>,
) {
    let _ = update_tx.send(BookletUpdate::SpreadRendered {
        layout: booklet.layout(),
        spread: booklet.render_current(),
    });
}

async fn process_command(
    cmd: BookletCommand,
    booklet: &mut Booklet<StaticRepository>,
    update_tx: &mpsc::UnboundedSender<BookletUpdate>,
) {
    match cmd {
        BookletCommand::Next => {
            if booklet.next() {
                send_spread(booklet, update_tx);
            }
        }
        BookletCommand::Previous => {
            if booklet.previous() {
                send_spread(booklet, update_tx);
            }
        }
        BookletCommand::ShowPage { page } => {
            if booklet.show_page(page) {
                send_spread(booklet, update_tx);
            } else {
                let _ = update_tx.send(BookletUpdate::Error {
                    message: format!("The booklet has no {} page", page.title()),
                });
            }
        }
        BookletCommand::Render => send_spread(booklet, update_tx),
        BookletCommand::LoadData { path } => match StaticRepository::load(&path).await {
            Ok(repository) => {
                let sessions = repository.session_count();
                let sponsors = repository.sponsors().len();
                booklet.replace_repository(repository);
                log::info!(
                    "Loaded {} sessions and {} sponsors from {}",
                    sessions,
                    sponsors,
                    path.display()
                );
                let _ = update_tx.send(BookletUpdate::DataLoaded {
                    path,
                    sessions,
                    sponsors,
                });
                send_spread(booklet, update_tx);
            }
            Err(e) => {
                let _ = update_tx.send(BookletUpdate::Error {
                    message: format!("Failed to load agenda: {}", e),
                });
            }
        },
        BookletCommand::CalculateStats => {
            let stats = calculate_statistics(booklet.repository(), booklet.options());
            let _ = update_tx.send(BookletUpdate::StatsCalculated { stats });
        }
        // Handled by the worker loop; nothing to do for a stray one
        BookletCommand::Resize { .. } | BookletCommand::Shutdown => {}
    }
}
