use yew::prelude::*;

use super::{BulletList, SectionHeader};

#[function_component(BusinessModelSection)]
pub fn business_model_section() -> Html {
    html! {
        <section id="business" class="mb-16">
            <SectionHeader title="İş Modeli" subtitle="Cloud Kitchen avantajları ve CAVA model uyarlaması" />

            <div class="grid md:grid-cols-3 gap-6 mb-8">
                { advantage("fas fa-dollar-sign", "red", "Düşük Maliyet", &[
                    "%60-70 daha düşük kira",
                    "Servis personeli yok",
                    "Prime location gerektirmez",
                ]) }
                { advantage("fas fa-chart-line", "blue", "Hızlı Ölçekleme", &[
                    "4-6 hafta açılış süresi",
                    "Düşük yatırım maliyeti",
                    "Test kitchen avantajı",
                ]) }
                { advantage("fas fa-bullseye", "green", "Data-Driven", &[
                    "Gerçek zamanlı takip",
                    "Müşteri davranış analizi",
                    "Dinamik menü optimizasyonu",
                ]) }
            </div>

            <div class="card bg-gradient-to-r from-blue-50 to-red-50">
                <div class="card-body p-8">
                    <h3 class="text-xl font-bold text-gray-900 mb-6">{"CAVA Model Uyarlaması"}</h3>
                    <div class="grid md:grid-cols-2 gap-8">
                        <div>
                            <h4 class="font-semibold text-gray-900 mb-3">{"🥗 Menü Konsepti"}</h4>
                            <BulletList items={bullets(&[
                                "Build-your-own bowl sistemi",
                                "Taze malzemeler (günlük tedarik)",
                                "Akdeniz + Asya füzyon lezzetleri",
                                "Vegan/vegetarian seçenekler",
                            ])} />
                        </div>
                        <div>
                            <h4 class="font-semibold text-gray-900 mb-3">{"💰 Fiyatlandırma"}</h4>
                            <BulletList items={bullets(&[
                                "Bowl: 35-55 RMB",
                                "Premium bowl: 55-75 RMB",
                                "Yan ürünler: 15-25 RMB",
                                "Ortalama sipariş: 52 RMB",
                            ])} />
                        </div>
                    </div>
                </div>
            </div>
        </section>
    }
}

fn bullets(items: &[&'static str]) -> Vec<AttrValue> {
    items.iter().map(|item| AttrValue::Static(*item)).collect()
}

fn advantage(icon: &str, tone: &str, title: &str, items: &[&'static str]) -> Html {
    html! {
        <div class={format!("card bg-base-100 border border-{tone}-200")}>
            <div class="card-body">
                <h3 class={format!("card-title text-{tone}-600")}>
                    <i class={icon.to_string()}></i>
                    {title}
                </h3>
                <BulletList items={bullets(items)} class="space-y-2 text-sm" />
            </div>
        </div>
    }
}
