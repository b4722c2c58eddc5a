// Data models and DTOs
// Inbound interaction events, synchronous responses, relay payload.

pub mod interaction;

pub use interaction::{
    interaction_type, CommandData, CommandOption, ForwardPayload, Interaction,
    InteractionResponse, Member, ResponseData, User,
};
