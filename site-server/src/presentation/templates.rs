use askama::Template;

/// One post card on the listing page, dates already formatted.
#[derive(Debug, Clone)]
pub(crate) struct PostCard {
    pub(crate) uid: String,
    pub(crate) title: String,
    pub(crate) subtitle: String,
    pub(crate) author: String,
    pub(crate) published: String,
}

/// Previous/next navigation link on the detail page.
#[derive(Debug, Clone)]
pub(crate) struct NavLink {
    pub(crate) uid: String,
    pub(crate) title: String,
}

/// A content section with pre-rendered HTML body fragments.
#[derive(Debug, Clone)]
pub(crate) struct SectionView {
    pub(crate) heading: String,
    pub(crate) body: Vec<String>,
}

#[derive(Template)]
#[template(path = "home.html")]
pub(crate) struct HomeTemplate {
    pub(crate) posts: Vec<PostCard>,
    pub(crate) next_page: Option<String>,
    pub(crate) preview: bool,
}

#[derive(Template)]
#[template(path = "post.html")]
pub(crate) struct PostTemplate {
    pub(crate) title: String,
    pub(crate) author: String,
    pub(crate) published: String,
    pub(crate) edited_date: String,
    pub(crate) edited_time: String,
    pub(crate) reading_minutes: u32,
    pub(crate) banner_url: Option<String>,
    pub(crate) sections: Vec<SectionView>,
    pub(crate) previous: Option<NavLink>,
    pub(crate) next: Option<NavLink>,
    pub(crate) preview: bool,
    pub(crate) comments_repo: String,
    pub(crate) comments_theme: String,
}

#[derive(Template)]
#[template(path = "error.html")]
pub(crate) struct ErrorTemplate {
    pub(crate) status: u16,
    pub(crate) message: String,
}
