//! Channel model ↔ entity mapping

use vote_core::entities::Channel;

use crate::models::ChannelModel;

impl From<ChannelModel> for Channel {
    fn from(model: ChannelModel) -> Self {
        Channel {
            id: model.id,
            name: model.name,
            vote: model.vote,
        }
    }
}
