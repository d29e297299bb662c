use tokio::sync::broadcast;
use uuid::Uuid;

const CHANNEL_CAPACITY: usize = 32;

/// Auth state changes pushed to interested components.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum AuthEvent {
    SignedIn { user_id: Uuid },
    SignedOut { user_id: Uuid },
}

/// In-process hub for auth state changes. Subscribers hold an
/// [`AuthSubscription`]; dropping (or explicitly unsubscribing) one removes
/// the listener, so repeated subscribe/drop cycles leave nothing behind.
#[derive(Debug, Clone)]
pub struct AuthEventHub {
    tx: broadcast::Sender<AuthEvent>,
}

pub struct AuthSubscription {
    rx: broadcast::Receiver<AuthEvent>,
}

impl AuthEventHub {
    pub fn new() -> Self {
        let (tx, _) = broadcast::channel(CHANNEL_CAPACITY);
        Self { tx }
    }

    pub fn publish(&self, event: AuthEvent) {
        // Send only fails when nobody is listening, which is fine.
        let _ = self.tx.send(event);
    }

    pub fn subscribe(&self) -> AuthSubscription {
        AuthSubscription {
            rx: self.tx.subscribe(),
        }
    }

    pub fn listener_count(&self) -> usize {
        self.tx.receiver_count()
    }
}

impl Default for AuthEventHub {
    fn default() -> Self {
        Self::new()
    }
}

impl AuthSubscription {
    pub async fn recv(&mut self) -> Option<AuthEvent> {
        loop {
            match self.rx.recv().await {
                Ok(event) => return Some(event),
                // A slow listener skips what it missed and keeps going.
                Err(broadcast::error::RecvError::Lagged(_)) => continue,
                Err(broadcast::error::RecvError::Closed) => return None,
            }
        }
    }

    pub fn try_recv(&mut self) -> Option<AuthEvent> {
        loop {
            match self.rx.try_recv() {
                Ok(event) => return Some(event),
                Err(broadcast::error::TryRecvError::Lagged(_)) => continue,
                Err(_) => return None,
            }
        }
    }

    pub fn unsubscribe(self) {
        drop(self);
    }
}
