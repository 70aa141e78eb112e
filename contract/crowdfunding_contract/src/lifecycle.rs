use crate::storage_types::{Campaign, CampaignState, Error};

pub fn require_state(campaign: &Campaign, expected: CampaignState) -> Result<(), Error> {
    if campaign.state != expected {
        return Err(Error::InvalidState);
    }
    Ok(())
}

/// Move a fundraising campaign to `Successful` once its balance covers the goal.
/// Returns true if the transition happened.
pub fn check_goal(campaign: &mut Campaign) -> bool {
    if campaign.state == CampaignState::Fundraising
        && campaign.current_balance >= campaign.goal_amount
    {
        campaign.state = CampaignState::Successful;
        return true;
    }
    false
}

/// Terminal transition after a completed withdrawal.
pub fn close(campaign: &mut Campaign) -> Result<(), Error> {
    require_state(campaign, CampaignState::Successful)?;
    campaign.state = CampaignState::Closed;
    Ok(())
}
