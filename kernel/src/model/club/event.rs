use derive_new::new;

use crate::model::id::ClubId;

#[derive(new, Debug, Clone)]
pub struct CreateClub {
    pub name: String,
    pub description: String,
    pub categories: Vec<String>,
    pub image_url: Option<String>,
}

#[derive(new, Debug)]
pub struct DeleteClub {
    pub club_id: ClubId,
}
