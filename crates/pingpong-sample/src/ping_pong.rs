use crate::message::Message;
use actor_mesh::{Actor, ActorName, Destination, Endpoint, Envelope, MeshError};
use async_trait::async_trait;
use tokio::sync::broadcast;

/// An endpoint that keeps a rally going.
///
/// Every handled delivery is answered with the counterpart message, addressed
/// to whoever sent it: a ping earns a pong, a pong earns a ping. Two mutually
/// subscribed `PingPong` endpoints therefore rally forever once either side
/// is seeded with a single message.
///
/// Identity, stream and event counter come from the embedded base
/// [`Actor`]; only the reaction is added here.
pub struct PingPong {
    inner: Actor<Message>,
}

impl PingPong {
    pub fn new(name: impl Into<ActorName>) -> Self {
        Self {
            inner: Actor::new(name),
        }
    }
}

#[async_trait]
impl Endpoint<Message> for PingPong {
    fn name(&self) -> &ActorName {
        self.inner.name()
    }

    fn event_id(&self) -> u64 {
        self.inner.event_id()
    }

    fn outbound(&self) -> broadcast::Receiver<Envelope<Message>> {
        self.inner.outbound()
    }

    fn broadcast(&self, message: Message, destination: Destination) {
        self.inner.broadcast(message, destination);
    }

    async fn handle_message(&self, sender: ActorName, message: Message) -> Result<(), MeshError> {
        self.inner.handle_message(sender.clone(), message).await?;
        self.inner
            .broadcast(message.counterpart(), Destination::Actor(sender));
        Ok(())
    }
}
