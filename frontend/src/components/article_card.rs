use compete_shared::ArticleDto;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct ArticleCardProps {
    pub article: ArticleDto,
    #[prop_or_default]
    pub is_author: bool,
}

#[function_component(ArticleCard)]
pub fn article_card(props: &ArticleCardProps) -> Html {
    let article = &props.article;

    html! {
        <div class="bg-white shadow rounded-lg overflow-hidden flex">
            if let Some(cover) = article.cover_url() {
                <img src={cover.to_string()} alt={article.title.clone()} class="w-32 h-32 object-cover flex-shrink-0" />
            }
            <div class="p-4 flex-1">
                <div class="flex items-center justify-between mb-1">
                    <h3 class="text-lg font-semibold text-gray-900">{&article.title}</h3>
                    if props.is_author {
                        <span class="text-xs px-2 py-1 bg-blue-100 text-blue-700 rounded">{"Author"}</span>
                    }
                </div>
                if let Some(category) = article.category.as_deref().filter(|c| !c.is_empty()) {
                    <span class="text-xs text-gray-500">{category}</span>
                }
                if let Some(summary) = article.summary.as_ref() {
                    <p class="text-sm text-gray-600 mt-2">{summary}</p>
                }
                <div class="flex space-x-4 text-xs text-gray-400 mt-2">
                    <span>{format!("👁 {}", article.view_count)}</span>
                    <span>{article.created_at_display()}</span>
                </div>
            </div>
        </div>
    }
}
