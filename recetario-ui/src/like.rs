use recetario_model::RecipeId;

/// Per-card transient like state.
///
/// Seeded from the record's persisted count at mount time, with a local
/// "I have liked this" flag that starts false. Every toggle reports the
/// new count for the caller to forward to the store. This is a single
/// viewer's toggle, not a multi-user vote: the same viewer may cycle it
/// indefinitely, and no identity is attached.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LikeCounter {
    recipe_id: RecipeId,
    likes: u32,
    is_liked: bool,
}

impl LikeCounter {
    /// Mounts a counter for one record, seeded with its persisted count.
    #[must_use]
    pub fn mount(recipe_id: RecipeId, initial_likes: u32) -> Self {
        Self {
            recipe_id,
            likes: initial_likes,
            is_liked: false,
        }
    }

    /// Likes if currently unliked, unlikes otherwise, and returns
    /// `(record id, new count)` for the caller to report upward.
    pub fn toggle(&mut self) -> (RecipeId, u32) {
        if self.is_liked {
            self.likes = self.likes.saturating_sub(1);
        } else {
            self.likes = self.likes.saturating_add(1);
        }
        self.is_liked = !self.is_liked;
        (self.recipe_id, self.likes)
    }

    /// The record this counter belongs to.
    #[must_use]
    pub fn recipe_id(&self) -> RecipeId {
        self.recipe_id
    }

    /// The current count as this card sees it.
    #[must_use]
    pub fn likes(&self) -> u32 {
        self.likes
    }

    /// Whether this viewer currently has the record liked.
    #[must_use]
    pub fn is_liked(&self) -> bool {
        self.is_liked
    }

    /// The button text: "Me gusta N" when liked, "Like N" otherwise.
    #[must_use]
    pub fn label(&self) -> String {
        if self.is_liked {
            format!("Me gusta {}", self.likes)
        } else {
            format!("Like {}", self.likes)
        }
    }
}
