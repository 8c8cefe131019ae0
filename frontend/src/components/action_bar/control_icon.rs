//! Material icons for action bar controls.

use common::action::IconId;
use dioxus::prelude::*;
use dioxus_free_icons::Icon;
use dioxus_free_icons::icons::md_action_icons::{MdBookmark, MdBookmarkBorder, MdDelete, MdDone};
use dioxus_free_icons::icons::md_content_icons::{MdContentCopy, MdSave};
use dioxus_free_icons::icons::md_editor_icons::MdModeEdit;
use dioxus_free_icons::icons::md_file_icons::MdFileDownload;
use dioxus_free_icons::icons::md_social_icons::MdShare;

#[component]
pub fn ControlIcon(icon: IconId) -> Element {
    match icon {
        IconId::Copy => rsx! { Icon { icon: MdContentCopy, style: "width: 20px; height: 20px;" } },
        IconId::Edit => rsx! { Icon { icon: MdModeEdit, style: "width: 20px; height: 20px;" } },
        IconId::EditDone => rsx! { Icon { icon: MdDone, style: "width: 20px; height: 20px;" } },
        IconId::Share => rsx! { Icon { icon: MdShare, style: "width: 20px; height: 20px;" } },
        IconId::Download => rsx! { Icon { icon: MdFileDownload, style: "width: 20px; height: 20px;" } },
        IconId::BookmarkFilled => rsx! { Icon { icon: MdBookmark, style: "width: 20px; height: 20px;" } },
        IconId::BookmarkOutline => rsx! { Icon { icon: MdBookmarkBorder, style: "width: 20px; height: 20px;" } },
        IconId::Save => rsx! { Icon { icon: MdSave, style: "width: 20px; height: 20px;" } },
        IconId::Delete => rsx! { Icon { icon: MdDelete, style: "width: 20px; height: 20px;" } },
    }
}
